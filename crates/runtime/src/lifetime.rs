use std::any::Any;

/// Owns everything a page behavior registered with the host.
///
/// Resources (listener guards, observers, timers) are dropped and teardown
/// hooks are run in reverse registration order when the lifetime is disposed.
/// Disposal happens at most once; dropping an undisposed lifetime disposes it.
///
/// Anything registered after disposal is torn down immediately.
pub struct Lifetime {
    name: &'static str,
    entries: Vec<Entry>,
    disposed: bool,
}

enum Entry {
    Hold(Box<dyn Any>),
    Hook(Box<dyn FnOnce()>),
}

impl Lifetime {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
            disposed: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Keeps `resource` alive until disposal, then drops it.
    pub fn hold<T: 'static>(&mut self, resource: T) {
        if self.disposed {
            drop(resource);
            return;
        }
        self.entries.push(Entry::Hold(Box::new(resource)));
    }

    /// Runs `hook` on disposal.
    pub fn on_dispose(&mut self, hook: impl FnOnce() + 'static) {
        if self.disposed {
            hook();
            return;
        }
        self.entries.push(Entry::Hook(Box::new(hook)));
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        let count = self.entries.len();
        while let Some(entry) = self.entries.pop() {
            match entry {
                Entry::Hold(resource) => drop(resource),
                Entry::Hook(hook) => hook(),
            }
        }
        tracing::debug!(behavior = self.name, entries = count, "disposed");
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifetime")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

/// Named collection of [`Lifetime`]s, one per installed behavior.
///
/// Names are unique: inserting a lifetime under a taken name disposes the
/// previous one. `dispose_all` tears down in reverse insertion order.
#[derive(Debug, Default)]
pub struct LifetimeSet {
    lifetimes: Vec<Lifetime>,
}

impl LifetimeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lifetime: Lifetime) {
        if let Some(idx) = self.position(lifetime.name()) {
            let mut previous = self.lifetimes.remove(idx);
            previous.dispose();
        }
        self.lifetimes.push(lifetime);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.lifetimes.iter().map(Lifetime::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lifetimes.is_empty()
    }

    /// Disposes the lifetime called `name`. Returns `false` if none was active.
    pub fn dispose(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                let mut lifetime = self.lifetimes.remove(idx);
                lifetime.dispose();
                true
            }
            None => false,
        }
    }

    pub fn dispose_all(&mut self) {
        while let Some(mut lifetime) = self.lifetimes.pop() {
            lifetime.dispose();
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lifetimes.iter().position(|l| l.name() == name)
    }
}

#[cfg(test)]
impl LifetimeSet {
    fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn len(&self) -> usize {
        self.lifetimes.len()
    }
}

impl Drop for LifetimeSet {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
