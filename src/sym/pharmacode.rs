//! Pharmacode (Pharmaceutical Binary Code) one-track encoding.
//!
//! Content is a plain integer in 3..=131070. Wide bars are 3 modules,
//! narrow bars 1 module, separated by 2-module gaps.

use crate::error::RenderError;
use crate::format::CodeFormat;

pub const MIN_VALUE: u32 = 3;
pub const MAX_VALUE: u32 = 131_070;

/// Encode a pharmacode value as 0/1 modules.
pub fn encode(data: &str) -> Result<Vec<u8>, RenderError> {
    let format = CodeFormat::Pharmacode;
    let value: u32 = data
        .parse()
        .map_err(|_| RenderError::invalid(&format, "pharmacode requires an integer"))?;
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(RenderError::invalid(
            &format,
            format!("pharmacode value must be in {MIN_VALUE}..={MAX_VALUE}"),
        ));
    }

    // Build bars most-significant first: even remainder takes a wide bar,
    // odd a narrow one, halving as we go.
    let mut modules = Vec::new();
    let mut z = value;
    while z != 0 {
        let mut bar: Vec<u8> = if z % 2 == 0 {
            z = (z - 2) / 2;
            vec![1, 1, 1, 0, 0]
        } else {
            z = (z - 1) / 2;
            vec![1, 0, 0]
        };
        bar.extend_from_slice(&modules);
        modules = bar;
    }
    // Drop the trailing gap.
    modules.truncate(modules.len() - 2);
    Ok(modules)
}
