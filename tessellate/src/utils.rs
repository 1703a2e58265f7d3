pub mod file_handler;
pub mod log;

use tessellate_core::models::Xyhw;

/// Parses an area given as `x,y,w,h`.
///
/// # Errors
///
/// Errors if there are not exactly four integers or if the width or height is negative.
pub fn parse_area(value: &str) -> Result<Xyhw, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid area {value:?}: {err}"))?;
    let &[x, y, w, h] = parts.as_slice() else {
        return Err(format!("invalid area {value:?}: expected x,y,w,h"));
    };
    if w < 0 || h < 0 {
        return Err(format!("invalid area {value:?}: negative size"));
    }
    Ok(Xyhw::new(x, y, w, h))
}
