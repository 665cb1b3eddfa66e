use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use voxcraft_blocks::{Block, BlockPos, MaterialKind};
use voxcraft_world::{EditError, WorldGenConfig, WorldStore, generate};

fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (-64i32..64, -8i32..8, -64i32..64).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

fn arb_material() -> impl Strategy<Value = MaterialKind> {
    (0usize..MaterialKind::ALL.len()).prop_map(|i| MaterialKind::ALL[i])
}

fn sorted(mut v: Vec<Block>) -> Vec<Block> {
    v.sort_by_key(|b| (b.pos, b.material));
    v
}

proptest! {
    #[test]
    fn add_then_get_and_refuse_second(p in arb_pos(), m in arb_material(), m2 in arb_material()) {
        let mut w = WorldStore::new();
        prop_assert!(w.add(p, m).is_ok());
        prop_assert_eq!(w.get(p), Some(m));
        let second = w.add(p, m2);
        prop_assert_eq!(second, Err(EditError::Occupied { pos: p, existing: m }));
        prop_assert_eq!(w.get(p), Some(m));
    }

    #[test]
    fn remove_after_add_clears_cell(p in arb_pos(), m in arb_material()) {
        let mut w = WorldStore::new();
        w.add(p, m).unwrap();
        prop_assert_eq!(w.remove(p), Ok(m));
        prop_assert_eq!(w.get(p), None);
        prop_assert_eq!(w.remove(p), Err(EditError::Absent { pos: p }));
    }

    #[test]
    fn snapshot_is_stable_without_mutation(
        edits in proptest::collection::vec((arb_pos(), arb_material()), 0..64)
    ) {
        let mut w = WorldStore::new();
        for (p, m) in edits {
            let _ = w.add(p, m);
        }
        let a = sorted(w.blocks().collect());
        let b = sorted(w.blocks().collect());
        prop_assert_eq!(a.len(), w.len());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn at_most_one_block_per_cell(
        edits in proptest::collection::vec((arb_pos(), arb_material(), any::<bool>()), 0..128)
    ) {
        let mut w = WorldStore::new();
        for (p, m, add) in edits {
            if add { let _ = w.add(p, m); } else { let _ = w.remove(p); }
        }
        let mut cells: Vec<BlockPos> = w.blocks().map(|b| b.pos).collect();
        let n = cells.len();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), n);
    }

    #[test]
    fn generation_is_deterministic_per_seed(seed in any::<u64>()) {
        let cfg = WorldGenConfig::default();
        let a = generate(&cfg, &mut StdRng::seed_from_u64(seed));
        let b = generate(&cfg, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(sorted(a.blocks().collect()), sorted(b.blocks().collect()));
    }
}

#[test]
fn generated_world_matches_layout_rules() {
    let cfg = WorldGenConfig::default();
    let world = generate(&cfg, &mut StdRng::seed_from_u64(7));
    for x in -10..10 {
        for z in -10..10 {
            let m = world.get(BlockPos::new(x, 0, z));
            assert!(
                matches!(m, Some(MaterialKind::Grass | MaterialKind::Dirt)),
                "ground cell ({x}, 0, {z}) was {m:?}"
            );
        }
    }
    let scattered: Vec<Block> = world.blocks().filter(|b| b.pos.y != 0).collect();
    assert_eq!(world.len(), 400 + scattered.len());
    assert!(!scattered.is_empty() && scattered.len() <= 30);
    for b in scattered {
        assert!((1..=3).contains(&b.pos.y));
        assert!((-10..10).contains(&b.pos.x) && (-10..10).contains(&b.pos.z));
        assert!(cfg.decorative.contains(&b.material));
    }
}

#[test]
fn dirt_chance_extremes() {
    let all_grass = WorldGenConfig {
        dirt_chance: 0.0,
        scatter_count: 0,
        ..WorldGenConfig::default()
    };
    let w = generate(&all_grass, &mut StdRng::seed_from_u64(1));
    assert!(w.blocks().all(|b| b.material == MaterialKind::Grass));

    let all_dirt = WorldGenConfig {
        dirt_chance: 1.0,
        scatter_count: 0,
        ..WorldGenConfig::default()
    };
    let w = generate(&all_dirt, &mut StdRng::seed_from_u64(1));
    assert!(w.blocks().all(|b| b.material == MaterialKind::Dirt));
    assert_eq!(w.len(), 400);
}
