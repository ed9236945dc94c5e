//! Key element registry

use std::collections::HashMap;

use crate::types::KeyToken;

use super::backend::KeyHandle;

/// Maps canonical key tokens to their rendering handles.
///
/// Populated once at first render and cleared on destroy. Highlight
/// operations resolve through this registry rather than walking the
/// host's element tree.
#[derive(Debug, Default)]
pub struct KeyElementRegistry {
    handles: HashMap<KeyToken, KeyHandle>,
}

impl KeyElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, token: KeyToken, handle: KeyHandle) {
        self.handles.insert(token, handle);
    }

    pub fn handle(&self, token: KeyToken) -> Option<KeyHandle> {
        self.handles.get(&token).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_the_identity_source() {
        let mut registry = KeyElementRegistry::new();
        registry.register(KeyToken::CapsLock, KeyHandle(7));
        assert_eq!(registry.handle(KeyToken::CapsLock), Some(KeyHandle(7)));
        assert_eq!(registry.handle(KeyToken::Enter), None);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.handle(KeyToken::CapsLock), None);
    }
}
