use std::rc::Rc;
use rusqlite::types::Value;
use super::dbtypes;

/// Values for binding to an `rarray` parameter.
pub fn multi<T, S, F>(f: F, values: &[T]) -> Rc<Vec<Value>>
where
    F: Fn(&T) -> S,
    Value: From<S>,
{
    Rc::new(values.iter().map(f).map(Value::from).collect())
}

pub fn ids(ids: &[dbtypes::Id]) -> Rc<Vec<Value>> {
    multi(|id| *id, ids)
}
