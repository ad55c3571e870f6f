#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::level::parse_tokens;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = GameTestState::new(
            r#"
#@ #
"#,
        );
        assert!(game.board.move_monster(Right));

        game.assert_matches(
            r#"
# @#
"#,
        );
    }

    #[test]
    fn monster_lands_exactly_on_target_in_every_direction() {
        let level = r#"
#####
#   #
# @ #
#   #
#####
"#;
        for direction in Direction::all() {
            let mut game = GameTestState::new(level);
            let start = game.monster();
            let expected = start.step(direction).unwrap();

            assert!(game.board.move_monster(direction));
            assert_eq!(game.monster(), expected);
            assert_eq!(game.board.move_count(), 1);
        }
    }

    #[test]
    fn monster_walks_over_snow() {
        let mut game = GameTestState::new(
            r#"
#@..#
"#,
        );
        game.assert_moves(&[Right, Right]);
        game.assert_matches(
            r#"
# .+#
"#,
        );
        assert_eq!(game.board.terrain_at(0, 2), Some(Terrain::Snow));
    }

    #[test]
    fn when_walk_into_block_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#@s#
"#,
        );
        game.assert_rejected(Left);
        game.assert_rejected(Up);
        game.assert_rejected(Down);
        assert_eq!(game.try_move(Left), Err(Rejection::Blocked(Position::new(0, 0))));
        assert_eq!(game.board.move_count(), 0);
    }

    #[test]
    fn when_walk_off_the_board_nothing_changes() {
        let mut game = GameTestState::new("@ ");
        assert_eq!(game.try_move(Up), Err(Rejection::OutOfBounds));
        game.assert_rejected(Left);
        game.assert_moves(&[Right]);
        game.assert_rejected(Right);
        assert_eq!(game.monster(), Position::new(0, 1));
        assert_eq!(game.board.move_count(), 1);
    }

    #[test]
    fn when_push_on_bare_ground_ball_keeps_size() {
        let mut game = GameTestState::new(
            r#"
#@s  #
"#,
        );
        game.assert_move(Right);
        game.assert_matches(
            r#"
# @s #
"#,
        );
        assert_eq!(game.board.snowballs().len(), 1);
    }

    #[test]
    fn when_small_pushed_onto_snow_it_becomes_mid() {
        let mut game = GameTestState::new(
            r#"
#@s.#
"#,
        );
        let outcome = game.assert_move(Right);

        assert_eq!(
            outcome,
            MoveOutcome::Push {
                from: Position::new(0, 1),
                to: Position::new(0, 2),
                snowball: SnowballOutcome::Rolled {
                    from: Position::new(0, 2),
                    to: Position::new(0, 3),
                    kind: SnowballType::Mid,
                },
            }
        );
        game.assert_matches(
            r#"
# @M#
"#,
        );
        assert_eq!(game.board.snowballs().len(), 1);
        assert!(game.board.snowball_at(0, 2).is_none());
        assert_eq!(game.board.snowball_at(0, 3).map(|b| b.kind), Some(SnowballType::Mid));
    }

    #[test]
    fn growth_continues_to_big_and_stops() {
        let mut game = GameTestState::new(
            r#"
#@s...#
"#,
        );
        game.assert_moves(&[Right, Right]);
        assert_eq!(game.board.snowball_at(0, 4).map(|b| b.kind), Some(SnowballType::Big));
        game.assert_move(Right);
        game.assert_matches(
            r#"
#  .+B#
"#,
        );
    }

    #[test]
    fn snow_stays_after_a_ball_grows_on_it() {
        let mut game = GameTestState::new(
            r#"
######
#@s. #
#  s #
#    #
######
"#,
        );
        game.assert_moves(&[Right, Right]);
        assert_eq!(game.board.terrain_at(1, 3), Some(Terrain::Snow));
        assert_eq!(game.board.snowball_at(1, 4).map(|b| b.kind), Some(SnowballType::Mid));

        // walk round and push the second ball up over the same snow
        game.assert_moves(&[Left, Down, Down, Right, Up]);
        assert_eq!(game.board.terrain_at(1, 3), Some(Terrain::Snow));
        assert_eq!(game.board.snowball_at(1, 3).map(|b| b.kind), Some(SnowballType::Mid));
        game.assert_matches(
            r#"
######
#  Mm#
#  @ #
#    #
######
"#,
        );
    }

    #[test]
    fn when_ball_pushed_into_block_nothing_changes() {
        let mut game = GameTestState::new(
            r#"
#@s#
"#,
        );
        game.assert_rejected(Right);
        assert_eq!(game.try_move(Right), Err(Rejection::Blocked(Position::new(0, 3))));
    }

    #[test]
    fn when_ball_pushed_off_the_board_nothing_changes() {
        let mut game = GameTestState::new("@s");
        game.assert_rejected(Right);
    }

    #[test]
    fn ball_grows_then_cannot_be_pushed_past_the_edge() {
        let tokens = vec![vec!["S"], vec!["SB"], vec!["M"], vec![""], vec![""]];
        let mut board = parse_tokens(&tokens).unwrap();

        assert!(board.move_monster(Up));
        assert_eq!(board.monster().position, Position::new(1, 0));
        assert_eq!(board.snowball_at(0, 0).map(|b| b.kind), Some(SnowballType::Mid));
        assert!(board.snowball_at(1, 0).is_none());

        assert!(!board.move_monster(Up));
        assert_eq!(board.monster().position, Position::new(1, 0));
        assert_eq!(board.snowball_at(0, 0).map(|b| b.kind), Some(SnowballType::Mid));
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn snowball_lookup_is_stable_between_moves() {
        let game = GameTestState::new(
            r#"
#@sm#
"#,
        );
        let first = game.board.snowball_at(0, 2);
        let second = game.board.snowball_at(0, 2);
        assert_eq!(first, second);
        assert!(std::ptr::eq(first.unwrap(), second.unwrap()));
        assert!(game.board.snowball_at(0, 1).is_none());
    }

    #[test]
    fn valid_position_excludes_blocks_and_outside() {
        let game = GameTestState::new(
            r#"
#@.
"#,
        );
        assert!(!game.board.valid_position(0, 0));
        assert!(game.board.valid_position(0, 1));
        assert!(game.board.valid_position(0, 2));
        assert!(!game.board.valid_position(0, 3));
        assert!(!game.board.valid_position(1, 0));
    }

    #[test]
    fn when_player_moves_back_board_is_equal() {
        let level = r#"
#@ s#
"#;
        let mut game = GameTestState::new(level);
        game.assert_moves(&[Right, Left]);
        game.assert_matches(level);
        assert_eq!(game.board.move_count(), 2);
    }

    #[test]
    fn lone_snowball_moves_without_counting() {
        let mut game = GameTestState::new(
            r#"
#@ s .#
"#,
        );
        assert!(game.board.move_element(MobileElement::Snowball(Position::new(0, 3)), Right));
        assert!(game.board.move_element(MobileElement::Snowball(Position::new(0, 4)), Right));
        game.assert_matches(
            r#"
#@   M#
"#,
        );
        assert_eq!(game.board.move_count(), 0);

        assert!(!game.board.move_element(MobileElement::Snowball(Position::new(0, 2)), Right));
        assert!(game.board.move_element(MobileElement::Monster, Right));
        assert_eq!(game.board.move_count(), 1);
    }

    #[test]
    fn lone_snowball_cannot_roll_onto_the_monster() {
        let mut game = GameTestState::new(
            r#"
#@s #
"#,
        );
        assert!(!game.board.move_element(MobileElement::Snowball(Position::new(0, 2)), Left));
        game.assert_matches(
            r#"
#@s #
"#,
        );
    }
}
