use super::error::TopologyError;
use super::graph::TopologyGraph;
use crate::core::models::arm::{ArmId, ArmRef};
use crate::core::models::graft::Graft;

/// One branch of a nested path definition.
///
/// The branch arm is grafted from its first bead onto every listed position
/// of its parent, once per position. Sub-branches graft onto this branch's arm.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub arm: ArmRef,
    pub attach_positions: Vec<usize>,
    pub sub_branches: Vec<Branch>,
}

impl Branch {
    pub fn new(arm: impl Into<ArmRef>, attach_positions: Vec<usize>) -> Self {
        Self {
            arm: arm.into(),
            attach_positions,
            sub_branches: Vec::new(),
        }
    }

    pub fn with_sub_branch(mut self, branch: Branch) -> Self {
        self.sub_branches.push(branch);
        self
    }
}

impl TopologyGraph {
    /// Declares a root arm plus a nested tree of grafted branches.
    ///
    /// [`ArmRef::Existing`] branches reuse the referenced arm (sharing it with
    /// every other structure that grafts it); [`ArmRef::Fresh`] branches always
    /// create a new arm. Returns the root arm.
    ///
    /// The whole definition is checked before anything is added, so on error
    /// the graph is left untouched.
    pub fn add_path(
        &mut self,
        root: impl Into<ArmRef>,
        branches: Vec<Branch>,
    ) -> Result<ArmId, TopologyError> {
        let root = root.into();
        self.check_arm_ref(&root)?;
        let mut pending: Vec<&Branch> = branches.iter().collect();
        while let Some(branch) = pending.pop() {
            self.check_arm_ref(&branch.arm)?;
            pending.extend(branch.sub_branches.iter());
        }

        let root = self.resolve(root)?;
        let mut stack: Vec<(ArmId, Branch)> =
            branches.into_iter().rev().map(|b| (root, b)).collect();
        while let Some((parent, branch)) = stack.pop() {
            let Branch {
                arm,
                attach_positions,
                sub_branches,
            } = branch;
            let arm = self.resolve(arm)?;
            self.add_graft(parent, arm, Graft::new(attach_positions))?;
            stack.extend(sub_branches.into_iter().rev().map(|b| (arm, b)));
        }
        Ok(root)
    }

    /// Like [`TopologyGraph::add_path`], registering the root as a chain type.
    pub fn add_chain_path(
        &mut self,
        root: impl Into<ArmRef>,
        branches: Vec<Branch>,
        name: Option<&str>,
    ) -> Result<ArmId, TopologyError> {
        if let Some(name) = name {
            self.ensure_chain_name_free(name)?;
        }
        let root = self.add_path(root, branches)?;
        self.mark_chain_type(root, name)
    }

    fn check_arm_ref(&self, arm: &ArmRef) -> Result<(), TopologyError> {
        match arm {
            ArmRef::Existing(id) => self.ensure_arm(*id),
            ArmRef::Fresh(segment) if segment.is_empty() => Err(TopologyError::EmptySegment),
            ArmRef::Fresh(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::segment::Segment;

    fn seg(blocks: &[(&str, usize)]) -> Segment {
        Segment::from_blocks(blocks.iter().copied()).unwrap()
    }

    #[test]
    fn nested_path_matches_explicit_construction() {
        let mut explicit = TopologyGraph::new();
        let c = explicit
            .add_chain_type(seg(&[("A", 10)]), Some("Ch"))
            .unwrap();
        let a1 = explicit.add_arm(seg(&[("B", 3), ("C", 2)])).unwrap();
        explicit
            .add_graft(c, a1, Graft::new(vec![1, 1, 2, 2, 4, 4, 8, 8]))
            .unwrap();
        let a2 = explicit.add_arm(seg(&[("A", 2)])).unwrap();
        explicit.add_graft(a1, a2, Graft::new(vec![0, 2, 4])).unwrap();

        let mut shorthand = TopologyGraph::new();
        let root = shorthand
            .add_chain_path(
                seg(&[("A", 10)]),
                vec![
                    Branch::new(seg(&[("B", 3), ("C", 2)]), vec![1, 1, 2, 2, 4, 4, 8, 8])
                        .with_sub_branch(Branch::new(seg(&[("A", 2)]), vec![0, 2, 4])),
                ],
                Some("Ch"),
            )
            .unwrap();

        assert_eq!(root, c);
        assert_eq!(shorthand.n_arms(), explicit.n_arms());
        let edges = |g: &TopologyGraph| -> Vec<_> {
            g.edges()
                .map(|(u, v, attrs)| (u, v, attrs.clone()))
                .collect()
        };
        assert_eq!(edges(&shorthand), edges(&explicit));
    }

    #[test]
    fn fresh_branches_always_create_new_arms() {
        let mut g = TopologyGraph::new();
        let side = seg(&[("D", 3)]);
        g.add_path(
            seg(&[("A", 10)]),
            vec![
                Branch::new(side.clone(), vec![5]),
                Branch::new(side.clone(), vec![4]),
            ],
        )
        .unwrap();
        assert_eq!(g.n_arms(), 3);
        assert_eq!(g.n_grafts(), 2);
        assert!(g.warnings().is_empty());
    }

    #[test]
    fn existing_branches_share_arms() {
        let mut g = TopologyGraph::new();
        let side = g.add_arm(seg(&[("D", 3)])).unwrap();
        let root = g
            .add_path(
                seg(&[("A", 10)]),
                vec![Branch::new(side, vec![5]), Branch::new(side, vec![4])],
            )
            .unwrap();
        assert_eq!(g.n_arms(), 2);
        assert_eq!(g.grafts_from(root).len(), 2);
        assert_eq!(g.warnings().len(), 1);
    }

    #[test]
    fn invalid_branch_leaves_graph_untouched() {
        let mut g = TopologyGraph::new();
        let err = g
            .add_path(
                seg(&[("A", 10)]),
                vec![
                    Branch::new(seg(&[("B", 1)]), vec![0])
                        .with_sub_branch(Branch::new(ArmId(99), vec![0])),
                ],
            )
            .unwrap_err();
        assert_eq!(err, TopologyError::UnknownArm(ArmId(99)));
        assert_eq!(g.n_arms(), 0);
        assert_eq!(g.n_grafts(), 0);
    }

    #[test]
    fn existing_root_is_reused() {
        let mut g = TopologyGraph::new();
        let root = g.add_arm(seg(&[("A", 4)])).unwrap();
        let again = g
            .add_path(root, vec![Branch::new(seg(&[("B", 1)]), vec![3])])
            .unwrap();
        assert_eq!(root, again);
        assert_eq!(g.n_arms(), 2);
    }
}
