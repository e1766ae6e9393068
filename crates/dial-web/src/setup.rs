#![forbid(unsafe_code)]

//! Page bring-up order and teardown bookkeeping.
//!
//! Bring-up runs in a fixed order: the dial surface, then the episode loader,
//! then each decorative [`Layer`]. Only the first two matter for the page to
//! work, so a layer that fails is logged at `debug` and skipped; it never
//! prevents the loader from starting.
//!
//! Everything a page instance puts into the document is tracked in a
//! [`Mounted`] so that `destroy` (or a dropped page) leaves the DOM as it was.

use std::fmt::Display;

use tracing::debug;

/// Decorative layers, installed after the dial and the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Arrow,
    Fullscreen,
    Scenes,
    Ambient,
}

impl Layer {
    pub const ALL: [Self; 4] = [Self::Arrow, Self::Fullscreen, Self::Scenes, Self::Ambient];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Fullscreen => "fullscreen",
            Self::Scenes => "scenes",
            Self::Ambient => "ambient",
        }
    }
}

/// A node the page inserted and must take back out.
pub trait Detach {
    fn detach(&self);
}

/// Listeners and inserted nodes owned by one page instance.
///
/// Dropping a listener unbinds it; inserted nodes are detached on
/// [`teardown`](Self::teardown) and on drop.
pub struct Mounted<L, E: Detach> {
    listeners: Vec<L>,
    elements: Vec<E>,
}

impl<L, E: Detach> Default for Mounted<L, E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            elements: Vec::new(),
        }
    }
}

impl<L, E: Detach> Mounted<L, E> {
    #[must_use]
    pub fn from_listeners(listeners: Vec<L>) -> Self {
        Self {
            listeners,
            elements: Vec::new(),
        }
    }

    pub fn push_listener(&mut self, listener: L) {
        self.listeners.push(listener);
    }

    pub fn push_element(&mut self, element: E) {
        self.elements.push(element);
    }

    /// Take over everything `other` holds.
    pub fn absorb(&mut self, mut other: Self) {
        self.listeners.append(&mut other.listeners);
        self.elements.append(&mut other.elements);
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.elements.is_empty()
    }

    /// Unbind every listener, then detach inserted nodes, newest first.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        while let Some(element) = self.elements.pop() {
            element.detach();
        }
    }
}

impl<L, E: Detach> Drop for Mounted<L, E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Host operations driven by [`bring_up`].
pub trait PageHost {
    type Listener;
    type Element: Detach;
    type Error: Display;

    /// Wire input on the dial surface.
    fn mount_dial(&mut self) -> Result<Mounted<Self::Listener, Self::Element>, Self::Error>;

    /// Start the episode import.
    fn spawn_loader(&mut self);

    fn install_layer(
        &mut self,
        layer: Layer,
    ) -> Result<Mounted<Self::Listener, Self::Element>, Self::Error>;
}

/// What [`bring_up`] managed to install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BringUp {
    pub dial_wired: bool,
    pub skipped: Vec<Layer>,
}

/// Wire the page into `mounted`. Never fails: a step that errors leaves
/// nothing behind and the sequence continues.
pub fn bring_up<H: PageHost>(
    host: &mut H,
    mounted: &mut Mounted<H::Listener, H::Element>,
) -> BringUp {
    let dial_wired = match host.mount_dial() {
        Ok(parts) => {
            mounted.absorb(parts);
            true
        }
        Err(err) => {
            debug!(error = %err, "dial input unavailable");
            false
        }
    };

    host.spawn_loader();

    let mut skipped = Vec::new();
    for layer in Layer::ALL {
        match host.install_layer(layer) {
            Ok(parts) => mounted.absorb(parts),
            Err(err) => {
                debug!(layer = layer.name(), error = %err, "decorative layer skipped");
                skipped.push(layer);
            }
        }
    }

    BringUp {
        dial_wired,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    /// Node that records its own detach in a shared journal.
    struct FakeNode {
        name: &'static str,
        journal: Journal,
    }

    impl Detach for FakeNode {
        fn detach(&self) {
            self.journal.borrow_mut().push(format!("detach {}", self.name));
        }
    }

    /// Listener that records its unbinding.
    struct FakeListener {
        name: &'static str,
        journal: Journal,
    }

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.journal.borrow_mut().push(format!("unbind {}", self.name));
        }
    }

    #[derive(Default)]
    struct FakeHost {
        journal: Journal,
        failing: Vec<Layer>,
        dial_fails: bool,
    }

    impl FakeHost {
        fn node(&self, name: &'static str) -> FakeNode {
            FakeNode {
                name,
                journal: Rc::clone(&self.journal),
            }
        }

        fn listener(&self, name: &'static str) -> FakeListener {
            FakeListener {
                name,
                journal: Rc::clone(&self.journal),
            }
        }

        fn log(&self, line: &str) {
            self.journal.borrow_mut().push(line.to_owned());
        }

        fn entries(&self) -> Vec<String> {
            self.journal.borrow().clone()
        }
    }

    impl PageHost for FakeHost {
        type Listener = FakeListener;
        type Element = FakeNode;
        type Error = String;

        fn mount_dial(&mut self) -> Result<Mounted<FakeListener, FakeNode>, String> {
            self.log("mount dial");
            if self.dial_fails {
                return Err("appendChild refused".into());
            }
            let mut parts = Mounted::from_listeners(vec![self.listener("click")]);
            parts.push_element(self.node("touch area"));
            Ok(parts)
        }

        fn spawn_loader(&mut self) {
            self.log("spawn loader");
        }

        fn install_layer(
            &mut self,
            layer: Layer,
        ) -> Result<Mounted<FakeListener, FakeNode>, String> {
            self.log(&format!("install {}", layer.name()));
            let mut parts = Mounted::from_listeners(vec![self.listener(layer.name())]);
            if self.failing.contains(&layer) {
                // Partially built parts must not leak when the step fails.
                drop(parts);
                return Err(format!("TypeError: {} unsupported", layer.name()));
            }
            if layer == Layer::Fullscreen {
                parts.push_element(self.node("overlay"));
            }
            Ok(parts)
        }
    }

    #[test]
    fn loader_starts_before_any_layer() {
        let mut host = FakeHost::default();
        let mut mounted = Mounted::default();
        let report = bring_up(&mut host, &mut mounted);

        assert_eq!(report, BringUp { dial_wired: true, skipped: vec![] });
        assert_eq!(
            host.entries(),
            vec![
                "mount dial",
                "spawn loader",
                "install arrow",
                "install fullscreen",
                "install scenes",
                "install ambient",
            ]
        );
        assert_eq!(mounted.listener_count(), 5);
        assert_eq!(mounted.element_count(), 2);
    }

    #[test]
    fn failing_layer_is_skipped_and_loader_still_runs() {
        let mut host = FakeHost {
            failing: vec![Layer::Fullscreen],
            ..FakeHost::default()
        };
        let mut mounted = Mounted::default();
        let report = bring_up(&mut host, &mut mounted);

        assert_eq!(report.skipped, vec![Layer::Fullscreen]);
        assert!(report.dial_wired);
        let entries = host.entries();
        assert!(entries.contains(&"spawn loader".to_owned()));
        assert!(entries.contains(&"unbind fullscreen".to_owned()));
        assert!(entries.contains(&"install ambient".to_owned()));
        // Dial click plus arrow, scenes, ambient.
        assert_eq!(mounted.listener_count(), 4);
        assert_eq!(mounted.element_count(), 1);
    }

    #[test]
    fn every_layer_failing_still_spawns_loader() {
        let mut host = FakeHost {
            failing: Layer::ALL.to_vec(),
            dial_fails: true,
            ..FakeHost::default()
        };
        let mut mounted = Mounted::default();
        let report = bring_up(&mut host, &mut mounted);

        assert!(!report.dial_wired);
        assert_eq!(report.skipped, Layer::ALL.to_vec());
        assert_eq!(host.entries()[1], "spawn loader");
        assert!(mounted.is_empty());
    }

    #[test]
    fn teardown_unbinds_and_detaches_everything() {
        let mut host = FakeHost::default();
        let mut mounted = Mounted::default();
        bring_up(&mut host, &mut mounted);
        host.journal.borrow_mut().clear();

        mounted.teardown();

        assert!(mounted.is_empty());
        let entries = host.entries();
        assert_eq!(entries.iter().filter(|e| e.starts_with("unbind")).count(), 5);
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.starts_with("detach"))
                .collect::<Vec<_>>(),
            vec!["detach overlay", "detach touch area"]
        );
    }

    #[test]
    fn second_bring_up_after_teardown_does_not_accumulate() {
        let mut host = FakeHost::default();
        let mut mounted = Mounted::default();
        bring_up(&mut host, &mut mounted);
        mounted.teardown();
        bring_up(&mut host, &mut mounted);

        assert_eq!(mounted.listener_count(), 5);
        assert_eq!(mounted.element_count(), 2);
    }

    #[test]
    fn dropping_mounted_detaches_nodes() {
        let host = FakeHost::default();
        {
            let mut mounted: Mounted<FakeListener, FakeNode> = Mounted::default();
            mounted.push_element(host.node("label"));
        }
        assert_eq!(host.entries(), vec!["detach label"]);
    }
}
