//! Generic lookups over ordered lists.

/// The element `shift` places away from the first element matching `reference_finder`.
/// Negative shifts move towards the start. With `should_loop` the index wraps around both
/// ends, otherwise stepping past an end yields `None`.
///
/// ## Example
/// ```
/// let list = vec!["hello", "world", "foo", "bar"];
/// let result = tessellate_core::utils::helpers::relative_find(&list, |&e| e == "world", 2, false);
/// assert_eq!(result, Some(&"bar"));
/// ```
pub fn relative_find<T, F>(
    list: &[T],
    reference_finder: F,
    shift: i32,
    should_loop: bool,
) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    let reference = i64::try_from(list.iter().position(reference_finder)?).ok()?;
    let len = i64::try_from(list.len()).ok()?;
    let target = reference + i64::from(shift);
    let index = if should_loop {
        target.rem_euclid(len)
    } else {
        target
    };
    list.get(usize::try_from(index).ok()?)
}
