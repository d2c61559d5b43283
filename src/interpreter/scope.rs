use std::collections::HashMap;

/// A stack of lexical scopes mapping names to bindings.
///
/// The bottom frame is the root scope, which holds the built-ins and is
/// never popped. Each block pushes a frame on entry and pops it on exit.
/// Lookup walks from the innermost frame outward, so an inner declaration
/// shadows an outer one until its block ends.
///
/// The same structure serves the type checker (binding names to types) and
/// the interpreter (binding names to values).
#[derive(Debug, Clone)]
pub struct ScopeStack<T> {
    frames: Vec<HashMap<String, T>>,
}

impl<T> ScopeStack<T> {
    /// Creates a stack whose root frame holds `root`.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use quill::interpreter::scope::ScopeStack;
    ///
    /// let scopes = ScopeStack::new(HashMap::from([("one".to_string(), 1)]));
    /// assert_eq!(scopes.get("one"), Some(&1));
    /// assert_eq!(scopes.depth(), 1);
    /// ```
    #[must_use]
    pub fn new(root: HashMap<String, T>) -> Self {
        Self { frames: vec![root] }
    }

    /// Pushes an empty innermost frame.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Drops the innermost frame and its bindings.
    ///
    /// The root frame is never removed.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use quill::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::new(HashMap::new());
    /// scopes.push();
    /// scopes.define("x", 5);
    /// scopes.pop();
    ///
    /// assert_eq!(scopes.get("x"), None);
    /// scopes.pop();
    /// assert_eq!(scopes.depth(), 1);
    /// ```
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Returns the number of frames, the root included.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `name` in the innermost frame, replacing any binding of the same
    /// name in that frame. Outer bindings are shadowed, not touched.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use quill::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::new(HashMap::new());
    /// scopes.define("x", 1);
    /// scopes.push();
    /// scopes.define("x", 2);
    /// assert_eq!(scopes.get("x"), Some(&2));
    ///
    /// scopes.pop();
    /// assert_eq!(scopes.get("x"), Some(&1));
    /// ```
    pub fn define(&mut self, name: &str, value: T) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Finds the binding of `name`, starting at the innermost frame.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Overwrites the binding of `name` in the nearest frame that holds it.
    ///
    /// Returns `false`, binding nothing, when no frame holds `name`.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use quill::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::new(HashMap::new());
    /// scopes.define("y", 1);
    /// scopes.push();
    ///
    /// assert!(scopes.assign_nearest("y", 5));
    /// assert!(!scopes.assign_nearest("z", 5));
    ///
    /// scopes.pop();
    /// assert_eq!(scopes.get("y"), Some(&5));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: T) -> bool {
        match self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(name)) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }
}

