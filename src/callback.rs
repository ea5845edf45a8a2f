use std::hash::{Hash, Hasher};
use std::sync::Arc;

use uuid::Uuid;

/// An identified handler passed from a parent screen to a child.
///
/// Two callbacks are equal when their identifiers are, regardless of the closure, so view
/// states holding callbacks can still be compared.
pub struct Callback<V> {
    identifier: Uuid,
    handler: Arc<dyn Fn(V) + Send + Sync>,
}

impl<V> Callback<V> {
    pub fn new(handler: impl Fn(V) + Send + Sync + 'static) -> Self {
        Self::with_identifier(Uuid::new_v4(), handler)
    }

    pub fn with_identifier(identifier: Uuid, handler: impl Fn(V) + Send + Sync + 'static) -> Self {
        Self {
            identifier,
            handler: Arc::new(handler),
        }
    }

    pub fn identifier(&self) -> Uuid {
        self.identifier
    }

    pub fn call(&self, value: V) {
        (self.handler)(value)
    }
}

impl<V> Clone for Callback<V> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<V> PartialEq for Callback<V> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<V> Eq for Callback<V> {}

impl<V> Hash for Callback<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<V> std::fmt::Debug for Callback<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashSet;

    #[test]
    fn call_forwards_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = Callback::new(move |v: u8| sink.lock().push(v));
        callback.call(1);
        callback.clone().call(2);
        assert_eq!(*seen.lock(), vec![1, 2]);
    }

    #[test]
    fn equality_is_by_identifier() {
        let id = Uuid::new_v4();
        let a = Callback::with_identifier(id, |_: ()| {});
        let b = Callback::with_identifier(id, |_: ()| panic!("never called"));
        let c = Callback::new(|_: ()| {});
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
