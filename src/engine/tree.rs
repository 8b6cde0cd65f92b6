//! Render Tree - The rendered element tree interactions run against.
//!
//! Manages the lifecycle of rendered elements:
//! - Index allocation with a free pool and generation counters
//! - Parent context stack for nested element creation
//! - Host/composite distinction (only host elements carry live handlers)
//! - Destroy callbacks on unmount
//!
//! # Example
//!
//! ```ignore
//! use spark_user_event::{Props, RenderTree};
//!
//! let tree = RenderTree::new();
//! tree.host("View", Props::new(), |tree| {
//!     tree.host("TextInput", Props::new().test_id("input"), |_| {});
//! });
//!
//! let input = tree.get_by_test_id("input")?;
//! assert_eq!(input.element_type().as_deref(), Some("TextInput"));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::props::{EventHandler, PointerEvents, Props, ResponderCallback};
use crate::error::QueryError;

// =============================================================================
// Nodes
// =============================================================================

/// Kind of a rendered node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Leaf-level platform element (`"View"`, `"TextInput"`, ...).
    Host(String),
    /// Application component. Transparent to event lookup.
    Composite(String),
}

impl NodeKind {
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Host(name) | NodeKind::Composite(name) => name,
        }
    }
}

struct Node {
    kind: NodeKind,
    parent: Option<usize>,
    children: Vec<usize>,
    props: Props,
}

#[derive(Default)]
struct TreeState {
    nodes: Vec<Option<Node>>,
    /// Bumped on release so stale handles never see a reused slot.
    generations: Vec<u32>,
    free_indices: Vec<usize>,
    parent_stack: Vec<usize>,
    destroy_callbacks: HashMap<usize, Vec<Box<dyn FnOnce()>>>,
}

impl TreeState {
    fn node(&self, index: usize, generation: u32) -> Option<&Node> {
        if self.generations.get(index).copied() != Some(generation) {
            return None;
        }
        self.nodes.get(index)?.as_ref()
    }

    fn allocate(&mut self, node: Node) -> (usize, u32) {
        let index = match self.free_indices.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            }
            None => {
                self.nodes.push(Some(node));
                self.generations.push(0);
                self.nodes.len() - 1
            }
        };
        (index, self.generations[index])
    }
}

// =============================================================================
// Render Tree
// =============================================================================

/// Shared handle over a rendered element tree.
///
/// Cloning is cheap; clones observe the same tree. Handlers typically capture
/// a clone to re-render (`set_props`) or unmount while an interaction runs.
#[derive(Clone, Default)]
pub struct RenderTree {
    state: Rc<RefCell<TreeState>>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host element under the current parent and render its children.
    pub fn host(
        &self,
        tag: impl Into<String>,
        props: Props,
        children: impl FnOnce(&RenderTree),
    ) -> ElementHandle {
        self.create(NodeKind::Host(tag.into()), props, children)
    }

    /// Create a composite element under the current parent and render its children.
    pub fn composite(
        &self,
        name: impl Into<String>,
        props: Props,
        children: impl FnOnce(&RenderTree),
    ) -> ElementHandle {
        self.create(NodeKind::Composite(name.into()), props, children)
    }

    fn create(
        &self,
        kind: NodeKind,
        props: Props,
        children: impl FnOnce(&RenderTree),
    ) -> ElementHandle {
        let (index, generation) = {
            let mut state = self.state.borrow_mut();
            let parent = state.parent_stack.last().copied();
            let allocated = state.allocate(Node {
                kind,
                parent,
                children: Vec::new(),
                props,
            });
            if let Some(parent) = parent {
                if let Some(Some(parent_node)) = state.nodes.get_mut(parent) {
                    parent_node.children.push(allocated.0);
                }
            }
            state.parent_stack.push(allocated.0);
            allocated
        };

        children(self);

        self.state.borrow_mut().parent_stack.pop();

        ElementHandle {
            tree: self.clone(),
            index,
            generation,
        }
    }

    /// Replace the props of a mounted element (a re-render).
    pub fn set_props(&self, element: &ElementHandle, props: Props) {
        let mut state = self.state.borrow_mut();
        if state.node(element.index, element.generation).is_none() {
            return;
        }
        if let Some(Some(node)) = state.nodes.get_mut(element.index) {
            node.props = props;
        }
    }

    /// Register a callback to run when `element` is unmounted.
    ///
    /// Ignored when `element` is no longer mounted.
    pub fn on_destroy(&self, element: &ElementHandle, callback: impl FnOnce() + 'static) {
        let mut state = self.state.borrow_mut();
        if state.node(element.index, element.generation).is_none() {
            return;
        }
        state
            .destroy_callbacks
            .entry(element.index)
            .or_default()
            .push(Box::new(callback));
    }

    /// Unmount `element` and all of its descendants.
    pub fn unmount(&self, element: &ElementHandle) {
        if !element.is_mounted() {
            return;
        }

        let parent = {
            let state = self.state.borrow();
            state.nodes[element.index].as_ref().and_then(|n| n.parent)
        };
        if let Some(parent) = parent {
            let mut state = self.state.borrow_mut();
            if let Some(Some(parent_node)) = state.nodes.get_mut(parent) {
                parent_node.children.retain(|&child| child != element.index);
            }
        }

        self.release_index(element.index);
    }

    fn release_index(&self, index: usize) {
        // Children first, collected up front to avoid holding the borrow
        let children = {
            let state = self.state.borrow();
            match state.nodes.get(index) {
                Some(Some(node)) => node.children.clone(),
                _ => return,
            }
        };
        for child in children {
            self.release_index(child);
        }

        // Callbacks run without a borrow so they may inspect the tree
        let callbacks = self.state.borrow_mut().destroy_callbacks.remove(&index);
        for callback in callbacks.into_iter().flatten() {
            callback();
        }

        let mut state = self.state.borrow_mut();
        state.nodes[index] = None;
        let generation = &mut state.generations[index];
        *generation = generation.wrapping_add(1);
        state.free_indices.push(index);
    }

    /// Find the single mounted host element with the given test ID.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<ElementHandle> {
        let state = self.state.borrow();
        state
            .nodes
            .iter()
            .enumerate()
            .find_map(|(index, node)| {
                let node = node.as_ref()?;
                let is_match = matches!(node.kind, NodeKind::Host(_))
                    && node.props.test_id.as_deref() == Some(test_id);
                is_match.then(|| ElementHandle {
                    tree: self.clone(),
                    index,
                    generation: state.generations[index],
                })
            })
    }

    /// Like [`find_by_test_id`](Self::find_by_test_id), but missing elements are an error.
    pub fn get_by_test_id(&self, test_id: &str) -> Result<ElementHandle, QueryError> {
        self.find_by_test_id(test_id).ok_or_else(|| QueryError::NoMatch {
            test_id: test_id.to_string(),
        })
    }

    /// Number of mounted elements (host and composite).
    pub fn mounted_count(&self) -> usize {
        self.state.borrow().nodes.iter().flatten().count()
    }

    fn handle(&self, index: usize) -> Option<ElementHandle> {
        let state = self.state.borrow();
        state.nodes.get(index)?.as_ref()?;
        Some(ElementHandle {
            tree: self.clone(),
            index,
            generation: state.generations[index],
        })
    }
}

// =============================================================================
// Element Handle
// =============================================================================

/// Opaque reference to an element in a [`RenderTree`].
///
/// Reads on an unmounted element yield `None`/defaults.
#[derive(Clone)]
pub struct ElementHandle {
    tree: RenderTree,
    index: usize,
    generation: u32,
}

impl ElementHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    pub fn is_mounted(&self) -> bool {
        self.tree.state.borrow().node(self.index, self.generation).is_some()
    }

    fn with_node<R>(&self, f: impl FnOnce(&Node) -> R) -> Option<R> {
        let state = self.tree.state.borrow();
        state.node(self.index, self.generation).map(f)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.with_node(|node| node.kind.clone())
    }

    /// Type tag for host elements, component name for composites.
    pub fn element_type(&self) -> Option<String> {
        self.with_node(|node| node.kind.name().to_string())
    }

    pub fn is_host(&self) -> bool {
        self.with_node(|node| matches!(node.kind, NodeKind::Host(_)))
            .unwrap_or(false)
    }

    pub fn parent(&self) -> Option<ElementHandle> {
        let parent = self.with_node(|node| node.parent)??;
        self.tree.handle(parent)
    }

    /// Nearest ancestor that is a host element, skipping composites.
    pub fn host_parent(&self) -> Option<ElementHandle> {
        let mut current = self.parent();
        while let Some(element) = current {
            if element.is_host() {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }

    pub fn children(&self) -> Vec<ElementHandle> {
        let children = self.with_node(|node| node.children.clone()).unwrap_or_default();
        children
            .into_iter()
            .filter_map(|index| self.tree.handle(index))
            .collect()
    }

    /// Snapshot of the element's props.
    pub fn props(&self) -> Option<Props> {
        self.with_node(|node| node.props.clone())
    }

    pub fn test_id(&self) -> Option<String> {
        self.with_node(|node| node.props.test_id.clone())?
    }

    /// Live controlled value, if the element is controlled.
    pub fn value(&self) -> Option<String> {
        // Clone the prop out first: a getter may read the tree
        let value = self.with_node(|node| node.props.value.clone())??;
        Some(value.get())
    }

    pub fn default_value(&self) -> Option<String> {
        self.with_node(|node| node.props.default_value.clone())?
    }

    pub fn is_multiline(&self) -> bool {
        self.with_node(|node| node.props.multiline == Some(true))
            .unwrap_or(false)
    }

    pub fn is_editable(&self) -> bool {
        self.with_node(|node| node.props.editable != Some(false))
            .unwrap_or(false)
    }

    pub fn pointer_events(&self) -> PointerEvents {
        self.with_node(|node| node.props.pointer_events.unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn handler(&self, prop_name: &str) -> Option<EventHandler> {
        self.with_node(|node| node.props.get_handler(prop_name))?
    }

    pub fn on_start_should_set_responder(&self) -> Option<ResponderCallback> {
        self.with_node(|node| node.props.on_start_should_set_responder.clone())?
    }

    pub fn on_move_should_set_responder(&self) -> Option<ResponderCallback> {
        self.with_node(|node| node.props.on_move_should_set_responder.clone())?
    }
}

impl PartialEq for ElementHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree.state, &other.tree.state)
            && self.index == other.index
            && self.generation == other.generation
    }
}

impl fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle")
            .field("index", &self.index)
            .field("type", &self.element_type())
            .field("test_id", &self.test_id())
            .finish()
    }
}
