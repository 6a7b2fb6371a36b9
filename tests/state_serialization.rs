use twenty48::{Direction, GameEngine, GameState};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), moves in 0..50usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new(&mut rng);
        for _ in 0..moves {
            if engine.is_terminal() {
                break;
            }
            let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            engine.apply_move(dir, &mut rng);
        }
        let state = engine.state();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, decoded);
    }
}
