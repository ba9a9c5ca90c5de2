//! Property tests: invariants that hold over arbitrary play.

use proptest::prelude::*;

use rust_morris::core::{Action, Coord, GameRng, MorrisConfig, Occupancy, RemovalRule, Side, COLUMNS, ROWS};
use rust_morris::rules::{ActionError, Game, Phase};
use rust_morris::Topology;

fn coord_strategy() -> impl Strategy<Value = Coord> {
    (0..COLUMNS.len(), 0..ROWS.len()).prop_map(|(c, r)| Coord::new(COLUMNS[c], ROWS[r]))
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        coord_strategy().prop_map(Action::Place),
        (coord_strategy(), coord_strategy()).prop_map(|(from, to)| Action::Move { from, to }),
        coord_strategy().prop_map(Action::Remove),
    ]
}

fn rule_strategy() -> impl Strategy<Value = RemovalRule> {
    prop_oneof![
        Just(RemovalRule::MillsProtectedUnlessAllInMills),
        Just(RemovalRule::MillsAlwaysProtected),
    ]
}

/// Play `steps` random legal actions, checking invariants after each.
fn random_play(config: MorrisConfig, mover_seed: u64, steps: usize) -> Result<Game, TestCaseError> {
    let mut game = Game::with_config(config).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let mut rng = GameRng::new(mover_seed);
    let pieces = game.config().pieces_per_side;

    for _ in 0..steps {
        let actions = game.legal_actions();
        let Some(&action) = rng.choose(&actions) else {
            break;
        };
        let before = game.clone();
        prop_assert_eq!(game.apply(action), Ok(()));

        for side in Side::ALL {
            let (old, new) = (before.counts(side), game.counts(side));
            prop_assert!(new.total() <= old.total(), "{} gained pieces", side);
            prop_assert!(new.total() <= pieces);
            prop_assert_eq!(usize::from(new.on_board), game.board().count(side));
        }

        let kept_turn = game.current_side() == before.current_side();
        prop_assert_eq!(kept_turn, game.phase() == Phase::Removing);
        prop_assert_eq!(game.move_log().len(), before.move_log().len() + 1);

        if game.phase() == Phase::GameOver {
            prop_assert!(game.winner().is_some());
            break;
        }
    }
    Ok(game)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_play_keeps_invariants(seed: u64, mover_seed: u64, rule in rule_strategy()) {
        let config = MorrisConfig::default().with_seed(seed).with_removal_rule(rule);
        random_play(config, mover_seed, 400)?;
    }

    #[test]
    fn prop_random_play_small_boards(
        seed: u64,
        mover_seed: u64,
        pieces in 3u8..=6,
        blocked in any::<bool>(),
    ) {
        let config = MorrisConfig::default()
            .with_seed(seed)
            .with_pieces_per_side(pieces)
            .with_blocked_side_loses(blocked);
        let game = random_play(config, mover_seed, 300)?;

        if game.phase() == Phase::GameOver {
            let loser = game.winner().map(Side::opponent);
            prop_assert!(loser.is_some());
        }
    }

    #[test]
    fn prop_rejected_actions_change_nothing(
        seed: u64,
        mover_seed: u64,
        warmup in 0usize..60,
        attempts in proptest::collection::vec(action_strategy(), 1..30),
    ) {
        let config = MorrisConfig::default().with_seed(seed);
        let mut game = random_play(config, mover_seed, warmup)?;

        for action in attempts {
            let before = game.clone();
            match game.apply(action) {
                Ok(()) => {}
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    #[test]
    fn prop_invalid_labels_always_rejected(
        seed: u64,
        mover_seed: u64,
        warmup in 0usize..80,
        column in proptest::char::range('A', 'Z'),
        row in 0u8..=9,
    ) {
        let label = Coord::new(column, row);
        prop_assume!(Topology::standard().point(label).is_none());

        let config = MorrisConfig::default().with_seed(seed);
        let mut game = random_play(config, mover_seed, warmup)?;
        let before = game.clone();

        prop_assert_eq!(game.get(label), Occupancy::Invalid);

        let expected = if game.phase() == Phase::GameOver {
            ActionError::GameAlreadyOver
        } else {
            ActionError::InvalidPoint(label)
        };
        let action = match game.phase() {
            Phase::Placing | Phase::GameOver => Action::Place(label),
            Phase::Moving => Action::Move { from: label, to: label },
            Phase::Removing => Action::Remove(label),
        };
        prop_assert_eq!(game.apply(action), Err(expected));
        prop_assert_eq!(&game, &before);
    }
}
