mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
#A.#
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(ActionKind::Move, game.assert_move(Right));

        game.assert_matches(r#"
#.A#
"#);
        assert_eq!(Right, game.engine.agent().facing);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#AB.#
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(ActionKind::Push, game.assert_move(Right));

        game.assert_matches(r#"
#.AB#
"#);
    }

    #[test]
    fn when_box_pushed_twice_onto_shelf_level_is_solved() {
        let level = r#"
AB.S
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.engine.is_solved());

        game.assert_move(Right);
        game.assert_matches(r#"
.ABS
"#);
        assert_eq!(Coord::new(0, 1), game.engine.agent().position);
        assert!(!game.engine.is_solved());

        game.assert_move(Right);
        game.assert_matches(r#"
..A*
"#);
        assert_eq!(Square::BoxOnShelf, game.engine.grid()[&Coord::new(0, 3)]);
        assert!(game.engine.is_solved());
    }

    #[test]
    fn when_box_pushed_off_shelf_shelf_is_uncovered() {
        let mut game = GameTestState::new(r#"
#A*.#
"#);
        assert!(game.engine.is_solved());
        game.assert_move(Right);
        game.assert_matches(r#"
#.AB#
"#);
        assert_eq!(Square::Shelf, game.engine.grid()[&Coord::new(0, 2)]);
        assert!(!game.engine.is_solved());
    }

    #[test]
    fn agent_walks_over_shelves() {
        let mut game = GameTestState::new(r#"
AS.
"#);
        game.assert_moves(&[Right, Right]);
        game.assert_matches(r#"
.SA
"#);
    }

    #[test]
    fn when_walking_into_wall_nothing_changes_but_facing() {
        let mut game = GameTestState::new(r#"
#A.#
"#);
        game.assert_blocked(Left);
        assert_eq!(Left, game.engine.agent().facing);
        game.assert_blocked(Up);
        assert_eq!(Up, game.engine.agent().facing);
        assert!(game.engine.history().is_empty());
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = GameTestState::new(r#"
#ABB.#
"#);
        game.assert_blocked(Right);
        assert_eq!(Right, game.engine.agent().facing);
    }

    #[test]
    fn when_block_pushed_into_wall_nothing_moves() {
        let mut game = GameTestState::new(r#"
#AB#
"#);
        game.assert_blocked(Right);
    }

    #[test]
    fn board_edges_act_as_walls() {
        let mut game = GameTestState::new(r#"
A.
.B
"#);
        game.assert_blocked(Up);
        game.assert_blocked(Left);
        game.assert_moves(&[Right]);
        game.assert_blocked(Right);
        game.assert_blocked(Up);
        // box against the bottom edge cannot be pushed down
        game.assert_blocked(Down);
        game.assert_matches(r#"
.A
.B
"#);
    }

    #[test]
    fn each_successful_action_is_recorded_in_order() {
        let mut game = GameTestState::new(r#"
#....#
#.AB.#
#....#
"#);
        game.assert_moves(&[Right, Down, Left]);
        game.assert_blocked(Down);
        game.assert_blocked(Down);

        let kinds: Vec<_> = game.engine.history().iter().map(|r| (r.kind, r.direction)).collect();
        assert_eq!(
            vec![
                (ActionKind::Push, Right),
                (ActionKind::Move, Down),
                (ActionKind::Move, Left),
            ],
            kinds
        );
    }

    #[test]
    fn when_blocks_swap_game_remains_equal() {
        let level = r#"
#....#
#AB..#
#.B..#
#....#
"#;
        let mut game = GameTestState::new(level);
        let original_grid = game.engine.grid().clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#....#
#.B..#
#.BA.#
#....#
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(level);
        assert_eq!(&original_grid, game.engine.grid());
    }
}
