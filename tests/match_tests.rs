use gridstrike::{
    AttackResponse, ConfigError, Match, MatchConfig, OpponentMode, Orientation, Phase,
    PlacementError, PlacementResponse, PlayerId, Session, TurnTimer,
};

fn three_ship_match() -> Match {
    Match::new(MatchConfig {
        rows: 9,
        cols: 9,
        num_ships: 3,
        opponent: OpponentMode::Human,
    })
    .unwrap()
}

/// Place the reference fleet: lengths 3, 2, 1 horizontally in rows 0, 2, 4.
fn place_fleet(game: &mut Match, player: PlayerId) {
    for row in [0, 2, 4] {
        let response = game.request_placement(player, row, 0, Orientation::Horizontal);
        assert!(
            matches!(
                response,
                PlacementResponse::Placed { .. } | PlacementResponse::PlayerDone
            ),
            "fleet placement failed: {response:?}"
        );
    }
}

#[test]
fn test_ship_lengths_count_down() {
    let mut game = three_ship_match();
    assert_eq!(game.next_ship_length(PlayerId::P0), Some(3));
    assert_eq!(
        game.request_placement(PlayerId::P0, 0, 0, Orientation::Horizontal),
        PlacementResponse::Placed { next_length: 2 }
    );
    assert_eq!(
        game.request_placement(PlayerId::P0, 2, 0, Orientation::Horizontal),
        PlacementResponse::Placed { next_length: 1 }
    );
    assert_eq!(
        game.request_placement(PlayerId::P0, 4, 0, Orientation::Horizontal),
        PlacementResponse::PlayerDone
    );
    assert_eq!(game.next_ship_length(PlayerId::P0), None);
    assert_eq!(game.board(PlayerId::P0).ship_spaces_remaining(), 6);
    assert_eq!(game.phase(), Phase::Placing(PlayerId::P1));
}

#[test]
fn test_placement_ignored_out_of_phase() {
    let mut game = three_ship_match();
    // player 1 cannot place during player 0's window
    assert_eq!(
        game.request_placement(PlayerId::P1, 0, 0, Orientation::Horizontal),
        PlacementResponse::Ignored
    );
    // attacks are disallowed during setup
    assert_eq!(
        game.request_attack(PlayerId::P0, 0, 0),
        AttackResponse::Ignored
    );
    assert!(!game.is_setup_complete());
}

#[test]
fn test_placement_rejection_keeps_window() {
    let mut game = three_ship_match();
    game.request_placement(PlayerId::P0, 0, 0, Orientation::Horizontal);
    // length-2 ship through (0, 0) collides with the length-3 ship
    assert_eq!(
        game.request_placement(PlayerId::P0, 0, 0, Orientation::Vertical),
        PlacementResponse::Rejected(PlacementError::Overlap)
    );
    assert_eq!(
        game.request_placement(PlayerId::P0, 8, 8, Orientation::Horizontal),
        PlacementResponse::Rejected(PlacementError::OutOfBounds)
    );
    // the failed attempts consumed nothing
    assert_eq!(game.next_ship_length(PlayerId::P0), Some(2));
    assert_eq!(game.phase(), Phase::Placing(PlayerId::P0));
}

#[test]
fn test_setup_transitions_to_active_p0() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    assert_eq!(game.phase(), Phase::Placing(PlayerId::P1));
    assert!(!game.is_setup_complete());
    place_fleet(&mut game, PlayerId::P1);
    assert_eq!(game.phase(), Phase::Active(PlayerId::P0));
    assert!(game.is_setup_complete());
}

#[test]
fn test_attack_wrong_turn_ignored() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    place_fleet(&mut game, PlayerId::P1);
    assert_eq!(
        game.request_attack(PlayerId::P1, 0, 0),
        AttackResponse::Ignored
    );
    assert!(!game.board(PlayerId::P0).space(0, 0).unwrap().is_hit());
}

#[test]
fn test_one_attack_per_turn_window() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    place_fleet(&mut game, PlayerId::P1);

    assert_eq!(
        game.request_attack(PlayerId::P0, 8, 8),
        AttackResponse::Miss
    );
    assert_eq!(game.phase(), Phase::AwaitingSwitch(PlayerId::P0));
    // a second attack in the same window is a no-op
    assert_eq!(
        game.request_attack(PlayerId::P0, 7, 7),
        AttackResponse::Ignored
    );
    assert!(!game.board(PlayerId::P1).space(7, 7).unwrap().is_hit());

    assert!(game.advance_turn());
    assert_eq!(game.phase(), Phase::Active(PlayerId::P1));
}

#[test]
fn test_already_hit_cell_keeps_window_open() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    place_fleet(&mut game, PlayerId::P1);

    assert_eq!(game.request_attack(PlayerId::P0, 0, 0), AttackResponse::Hit);
    assert!(game.advance_turn());
    assert_eq!(
        game.request_attack(PlayerId::P1, 8, 8),
        AttackResponse::Miss
    );
    assert!(game.advance_turn());

    // re-clicking an already-hit cell does not consume the turn
    assert_eq!(
        game.request_attack(PlayerId::P0, 0, 0),
        AttackResponse::Ignored
    );
    assert_eq!(game.phase(), Phase::Active(PlayerId::P0));
    assert_eq!(game.request_attack(PlayerId::P0, 0, 1), AttackResponse::Hit);
}

#[test]
fn test_advance_turn_requires_resolved_attack() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    place_fleet(&mut game, PlayerId::P1);
    assert!(!game.advance_turn());
    assert_eq!(game.phase(), Phase::Active(PlayerId::P0));
}

#[test]
fn test_attack_flow_to_game_over() {
    let mut game = three_ship_match();
    place_fleet(&mut game, PlayerId::P0);
    place_fleet(&mut game, PlayerId::P1);

    // hit (0,0), then a miss at (8,8) keeps the counter at 5
    assert_eq!(game.request_attack(PlayerId::P0, 0, 0), AttackResponse::Hit);
    assert_eq!(game.board(PlayerId::P1).ship_spaces_remaining(), 5);
    assert!(game.advance_turn());
    assert_eq!(
        game.request_attack(PlayerId::P1, 8, 8),
        AttackResponse::Miss
    );
    assert_eq!(game.board(PlayerId::P0).ship_spaces_remaining(), 6);
    assert!(game.advance_turn());

    // sink the rest of player 1's fleet, alternating with misses
    let targets = [(0, 1), (0, 2), (2, 0), (2, 1), (4, 0)];
    let mut misses = (5..9).flat_map(|row| (5..9).map(move |col| (row, col)));
    for (i, &(row, col)) in targets.iter().enumerate() {
        let response = game.request_attack(PlayerId::P0, row, col);
        if i + 1 == targets.len() {
            assert_eq!(response, AttackResponse::Win);
        } else {
            assert_eq!(response, AttackResponse::Hit);
            assert!(game.advance_turn());
            let (mr, mc) = misses.next().unwrap();
            assert_eq!(
                game.request_attack(PlayerId::P1, mr, mc),
                AttackResponse::Miss
            );
            assert!(game.advance_turn());
        }
    }

    assert_eq!(game.phase(), Phase::Over(PlayerId::P0));
    assert_eq!(game.winner(), Some(PlayerId::P0));
    assert_eq!(game.board(PlayerId::P1).ship_spaces_remaining(), 0);
    assert!(game.board(PlayerId::P1).check_win());

    // terminal: no request is accepted any more
    assert_eq!(
        game.request_attack(PlayerId::P0, 6, 6),
        AttackResponse::Ignored
    );
    assert_eq!(
        game.request_placement(PlayerId::P1, 6, 0, Orientation::Horizontal),
        PlacementResponse::Ignored
    );
    assert!(!game.advance_turn());
}

#[test]
fn test_turn_timer_counts_down() {
    let mut timer = TurnTimer::default();
    assert_eq!(timer.remaining(), 3);
    assert!(!timer.tick());
    assert!(!timer.tick());
    assert!(timer.tick());
    assert!(timer.is_expired());
    // ticking past zero stays expired
    assert!(timer.tick());
}

#[test]
fn test_turn_timer_force() {
    let mut timer = TurnTimer::new(10);
    assert!(!timer.is_expired());
    timer.force();
    assert!(timer.is_expired());
    assert_eq!(timer.remaining(), 0);
}

#[test]
fn test_config_validation() {
    let bad = MatchConfig {
        rows: 0,
        ..MatchConfig::default()
    };
    assert_eq!(bad.validate(), Err(ConfigError::EmptyGrid));

    let bad = MatchConfig {
        num_ships: 0,
        ..MatchConfig::default()
    };
    assert_eq!(bad.validate(), Err(ConfigError::NoShips));

    let bad = MatchConfig {
        rows: 5,
        cols: 5,
        num_ships: 6,
        opponent: OpponentMode::Human,
    };
    assert_eq!(
        bad.validate(),
        Err(ConfigError::TooManyShips {
            requested: 6,
            max: 5
        })
    );

    assert!(MatchConfig::default().validate().is_ok());
}

#[test]
fn test_session_builds_default_match() {
    let game = Session::new().start().unwrap();
    assert_eq!(game.phase(), Phase::Placing(PlayerId::P0));
    assert_eq!(game.num_ships(), 5);
    assert_eq!(game.board(PlayerId::P0).rows(), 9);
    assert_eq!(game.board(PlayerId::P1).cols(), 9);
}

#[test]
fn test_session_clamps_ship_selector() {
    let mut session = Session::new();
    session.num_ships(42);
    assert_eq!(session.config().num_ships, 9);
    session.num_ships(0);
    assert_eq!(session.config().num_ships, 1);
}
