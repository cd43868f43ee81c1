/// String key/value storage that survives process restarts.
///
/// Implementations swallow their own failures: a read that cannot be served
/// returns `None` and a write that cannot be persisted is dropped. Callers
/// treat "nothing stored" and "storage unavailable" the same way.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
