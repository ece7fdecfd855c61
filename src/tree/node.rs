use glam::DVec3;
use peniko::Color;

use super::Node;
use crate::{pyramid::Pyramid, surface::Surface};

/// Values shared by every node visited during one descent of a [`Tree`](super::Tree).
#[derive(Clone, Copy, Debug)]
pub struct DrawContext {
    /// Side length at or below which nodes stop subdividing.
    pub min_side: f64,
    /// Pivot of the whole scene. Leaves rotate around it, never around their own centre.
    pub rotation_centre: DVec3,
    /// Total rotation from the unrotated pose.
    pub rotation: DVec3,
    /// Fill colour of every face.
    pub colour: Color,
}

/// Node of the lazy subdivision tree.
///
/// A node is either a leaf, rendered as a single [`Pyramid`], or has exactly four children, one per
/// vertex of its half-size pyramid. Children are created the first time a node needs more detail
/// and are dropped as soon as it does not.
#[derive(Clone, Debug, Default)]
pub struct TreeNode {
    depth: u32,
    children: Node<Box<[TreeNode; 4]>>,
}

impl TreeNode {
    /// Creates a root node.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node one level below `parent`.
    #[inline]
    pub fn child_of(parent: &Self) -> Self {
        Self {
            depth: parent.depth + 1,
            children: Node::External,
        }
    }

    /// Distance to the root.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Node::External)
    }

    /// The four children, if any.
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.children {
            Node::Internal(children) => Some(&**children),
            Node::External => None,
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.children()
            .map_or(1, |children| children.iter().map(Self::leaf_count).sum())
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children().map_or(0, |children| {
            children.iter().map(Self::node_count).sum::<usize>()
        })
    }

    /// Number of levels below this node.
    pub fn height(&self) -> u32 {
        self.children().map_or(0, |children| {
            1 + children.iter().map(Self::height).max().unwrap_or_default()
        })
    }

    /// Returns the four children, creating them first if the node is a leaf.
    pub fn reproduce(&mut self) -> &mut [Self; 4] {
        if self.is_leaf() {
            let children = std::array::from_fn(|_| Self::child_of(self));
            self.children = Node::Internal(Box::new(children));
        }

        match &mut self.children {
            Node::Internal(children) => &mut **children,
            Node::External => unreachable!("children were just created"),
        }
    }

    /// Drops the whole subtree below this node.
    pub fn prune(&mut self) {
        if let Node::Internal(children) = std::mem::take(&mut self.children) {
            log::trace!(
                "pruning {} nodes below depth {}",
                children.iter().map(Self::node_count).sum::<usize>(),
                self.depth
            );
        }
    }

    /// Draws the region of side `side` centred on `centre` and returns how many leaf pyramids were
    /// rasterized.
    ///
    /// Above [`DrawContext::min_side`] the region is split into four half-size regions, one per
    /// vertex of the pyramid of side `side / 2`, and each child draws one of them. At or below it,
    /// the subtree is pruned and the node rasterizes its own pyramid, rotated around the context's
    /// rotation centre.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        context: &DrawContext,
        side: f64,
        centre: DVec3,
    ) -> usize {
        if side > context.min_side {
            let half = side / 2.0;
            let pyramid = Pyramid::new(half, centre);

            self.reproduce()
                .iter_mut()
                .zip(pyramid.vertices())
                .map(|(child, vertex)| child.draw(surface, context, half, vertex.position))
                .sum()
        } else {
            self.prune();

            Pyramid::new(side, centre)
                .move_centre_to(context.rotation_centre)
                .rotate(context.rotation)
                .rasterize(surface, context.colour);

            1
        }
    }
}
