use crate::Record;

/// Field-level validation run before a record is written.
///
/// Returning `false` rejects the write. A rejection is a normal outcome,
/// reported as `false` from [`Record::persist`] and as
/// [`Updated::none`](crate::Updated::none) from [`Record::update`].
///
/// Closures taking `(&Record, is_update)` implement this trait:
///
/// ```
/// use rowmap::{Record, Validator};
///
/// let non_empty_name = |record: &Record, _is_update: bool| {
///     record.get("name").and_then(|name| name.as_str()).is_some_and(|name| !name.is_empty())
/// };
///
/// fn assert_validator(_: impl Validator) {}
/// assert_validator(non_empty_name);
/// ```
pub trait Validator: Send + Sync + 'static {
    fn validate(&self, record: &Record, is_update: bool) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&Record, bool) -> bool + Send + Sync + 'static,
{
    fn validate(&self, record: &Record, is_update: bool) -> bool {
        self(record, is_update)
    }
}
