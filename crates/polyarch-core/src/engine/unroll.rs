use super::error::EngineError;
use crate::core::models::arm::ArmId;
use crate::core::models::graft::{AttachEnd, Graft};
use crate::core::topology::error::TopologyError;
use crate::core::topology::graph::TopologyGraph;
use tracing::{info, instrument};

impl TopologyGraph {
    /// Rebuilds the topology so that every graft occurrence is its own arm.
    ///
    /// Each chain type is walked from its root in the same depth-first order
    /// as bead expansion, creating one arm per visited occurrence. No two
    /// occurrences in the result share an arm index, every edge has a single
    /// attach position and multiplicity 1, and arms not reachable from a
    /// chain type are dropped. Unrolling an already unrolled graph
    /// reproduces it.
    #[instrument(skip_all, name = "fully_enumerate")]
    pub fn fully_enumerate(&self) -> Result<TopologyGraph, EngineError> {
        self.ensure_valid()?;

        let mut unrolled = TopologyGraph::new();
        for chain in self.chain_types() {
            self.unroll_chain(chain.root, &chain.name, &mut unrolled)?;
        }

        info!(
            arms_before = self.n_arms(),
            arms_after = unrolled.n_arms(),
            chains = unrolled.chain_types().len(),
            "Topology fully enumerated."
        );
        Ok(unrolled)
    }

    /// Copies the tree below `root` into `unrolled`, one arm per occurrence.
    fn unroll_chain(
        &self,
        root: ArmId,
        name: &str,
        unrolled: &mut TopologyGraph,
    ) -> Result<(), EngineError> {
        // (source arm, parent in the unrolled graph, bead position on that parent)
        let mut stack: Vec<(ArmId, Option<(ArmId, usize)>)> = vec![(root, None)];

        while let Some((source, parent)) = stack.pop() {
            let segment = self
                .arm(source)
                .ok_or(TopologyError::UnknownArm(source))?
                .segment()
                .compacted();
            let copy = match parent {
                None => unrolled.add_chain_type(segment, Some(name))?,
                Some((parent, position)) => {
                    let copy = unrolled.add_arm(segment)?;
                    unrolled.add_graft(parent, copy, Graft::new(vec![position]))?;
                    copy
                }
            };

            let mut children = Vec::new();
            for (target, attrs) in self.grafts_from(source) {
                if attrs.attach_end != AttachEnd::Head {
                    return Err(EngineError::UnsupportedAttachEnd {
                        base: source,
                        graft: target,
                    });
                }
                children.reserve(attrs.n_occurrences());
                children.extend(
                    attrs
                        .occurrences()
                        .map(|position| (target, Some((copy, position)))),
                );
            }
            stack.extend(children.into_iter().rev());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::segment::Segment;
    use std::collections::HashSet;

    fn seg(blocks: &[(&str, usize)]) -> Segment {
        Segment::from_blocks(blocks.iter().copied()).unwrap()
    }

    /// Comb with shared side arms that carry their own grafts.
    fn shared_comb() -> TopologyGraph {
        let mut g = TopologyGraph::new();
        let c = g.add_chain_type(seg(&[("A", 5), ("A", 5)]), Some("Ch")).unwrap();
        let a1 = g.add_arm(seg(&[("B", 3), ("C", 2)])).unwrap();
        g.add_graft(c, a1, Graft::new(vec![1, 2, 4, 8]).with_multiplicity(2))
            .unwrap();
        let a2 = g.add_arm(seg(&[("A", 2)])).unwrap();
        g.add_graft(a1, a2, Graft::new(vec![0, 2, 4])).unwrap();
        g
    }

    #[test]
    fn every_occurrence_gets_its_own_arm() {
        let unrolled = shared_comb().fully_enumerate().unwrap();
        // 1 backbone + 8 side arms + 8 * 3 tips
        assert_eq!(unrolled.n_arms(), 33);
        assert_eq!(unrolled.n_grafts(), 32);

        let targets: Vec<ArmId> = unrolled.edges().map(|(_, v, _)| v).collect();
        let distinct: HashSet<_> = targets.iter().collect();
        assert_eq!(distinct.len(), targets.len());

        for (_, _, attrs) in unrolled.edges() {
            assert_eq!(attrs.attach_positions.len(), 1);
            assert_eq!(attrs.multiplicity, 1);
            assert_eq!(attrs.attach_end, AttachEnd::Head);
        }
        assert!(unrolled.is_valid());
        assert!(unrolled.warnings().is_empty());
    }

    #[test]
    fn chain_names_and_compacted_roots_are_kept() {
        let unrolled = shared_comb().fully_enumerate().unwrap();
        let root = unrolled.chain_root("Ch").unwrap();
        assert_eq!(root, ArmId(0));
        assert_eq!(unrolled.arm(root).unwrap().n_blocks(), 1);
        assert_eq!(unrolled.arm(root).unwrap().n_beads(), 10);
    }

    #[test]
    fn unrolling_is_idempotent() {
        let once = shared_comb().fully_enumerate().unwrap();
        let twice = once.fully_enumerate().unwrap();
        assert_eq!(once.to_record(), twice.to_record());
    }

    #[test]
    fn unrolled_graph_differs_from_shared_one() {
        let g = shared_comb();
        assert_ne!(g.fully_enumerate().unwrap().to_record(), g.to_record());
    }

    #[test]
    fn unreachable_arms_are_dropped() {
        let mut g = shared_comb();
        g.add_arm(seg(&[("Z", 4)])).unwrap();
        let unrolled = g.fully_enumerate().unwrap();
        assert!(unrolled.arms().iter().all(|a| a.sequence()[0] != "Z"));
    }

    #[test]
    fn multiple_chain_types_are_unrolled_independently() {
        let mut g = shared_comb();
        let star = g.add_chain_type(seg(&[("S", 1)]), Some("Star")).unwrap();
        let arm = g.add_arm(seg(&[("S", 4)])).unwrap();
        g.add_graft(star, arm, Graft::new(vec![0]).with_multiplicity(3))
            .unwrap();

        let unrolled = g.fully_enumerate().unwrap();
        let star_root = unrolled.chain_root("Star").unwrap();
        assert_eq!(unrolled.grafts_from(star_root).len(), 3);
        assert_eq!(unrolled.n_arms(), 33 + 4);
    }

    #[test]
    fn deep_graft_chains_unroll_without_exhausting_the_stack() {
        let mut g = TopologyGraph::new();
        let mut parent = g.add_chain_type(seg(&[("A", 1)]), Some("Deep")).unwrap();
        for _ in 0..50_000 {
            let child = g.add_arm(seg(&[("A", 1)])).unwrap();
            g.add_graft(parent, child, Graft::new(vec![0])).unwrap();
            parent = child;
        }
        let unrolled = g.fully_enumerate().unwrap();
        assert_eq!(unrolled.n_arms(), 50_001);
        assert_eq!(unrolled.n_grafts(), 50_000);
        assert_eq!(unrolled.expand_chain("Deep").unwrap().n_beads(), 50_001);
    }

    /// Shared arms, multiplicity, a parallel edge, and sibling edges declared
    /// after deeper ones.
    fn nested_shared() -> TopologyGraph {
        let mut g = TopologyGraph::new();
        let c = g.add_chain_type(seg(&[("A", 10)]), Some("Ch")).unwrap();
        let a1 = g.add_arm(seg(&[("B", 3), ("C", 2)])).unwrap();
        let a2 = g.add_arm(seg(&[("D", 2)])).unwrap();
        let a3 = g.add_arm(seg(&[("E", 3)])).unwrap();
        g.add_graft(c, a1, Graft::new(vec![8, 1]).with_multiplicity(2))
            .unwrap();
        g.add_graft(a1, a2, Graft::new(vec![4, 0])).unwrap();
        g.add_graft(c, a3, Graft::new(vec![5])).unwrap();
        g.add_graft(a2, a3, Graft::new(vec![1]).with_multiplicity(2))
            .unwrap();
        g.add_graft(c, a1, Graft::new(vec![0])).unwrap();
        g
    }

    #[test]
    fn nested_unrolling_preserves_bead_graph() {
        let g = nested_shared();
        let shared = g.expand_chain("Ch").unwrap();
        assert_eq!(shared.n_beads(), 118);
        assert_eq!(shared.n_bonds(), 117);

        let unrolled = g.fully_enumerate().unwrap();
        assert_eq!(unrolled.expand_chain("Ch").unwrap(), shared);
        assert_eq!(
            unrolled.fully_enumerate().unwrap().to_record(),
            unrolled.to_record()
        );
    }

    #[test]
    fn tail_attachment_cannot_be_unrolled() {
        let mut g = shared_comb();
        let tail = g.add_arm(seg(&[("T", 2)])).unwrap();
        g.add_graft(ArmId(2), tail, Graft::new(vec![0]).with_attach_end(AttachEnd::Tail))
            .unwrap();
        assert_eq!(
            g.fully_enumerate().unwrap_err(),
            EngineError::UnsupportedAttachEnd {
                base: ArmId(2),
                graft: tail
            }
        );
    }

    #[test]
    fn cyclic_topology_cannot_be_unrolled() {
        let mut g = shared_comb();
        g.add_graft(ArmId(2), ArmId(0), Graft::new(vec![0])).unwrap();
        assert!(matches!(
            g.fully_enumerate(),
            Err(EngineError::CyclicTopology { .. })
        ));
    }
}
