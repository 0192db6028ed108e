#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use letterpress::{
        parse_indices, play_turn, run_game, AiPlayer, CliPlayer, GameEngine, GameError, Grid,
        InputError, Player, Side, Strategy, WordList,
    };

    fn cat_grid() -> Grid<3> {
        Grid::from_str_letters("catogruqe").unwrap()
    }

    fn output_of(player: CliPlayer<Cursor<&[u8]>, Vec<u8>>) -> String {
        String::from_utf8(player.into_output()).unwrap()
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(parse_indices("0 1 2", 9), Ok(vec![0, 1, 2]));
        assert_eq!(parse_indices("  8\t3 \n", 9), Ok(vec![8, 3]));
        assert_eq!(parse_indices("", 9), Err(InputError::Empty));
        assert_eq!(parse_indices("   \n", 9), Err(InputError::Empty));
        assert_eq!(
            parse_indices("0 x 2", 9),
            Err(InputError::NotANumber("x".to_string()))
        );
        assert_eq!(
            parse_indices("0 -1", 9),
            Err(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            parse_indices("0 9", 9),
            Err(InputError::OutOfRange { index: 9, cells: 9 })
        );
        assert_eq!(parse_indices("4 2 4", 9), Err(InputError::Repeated(4)));
    }

    #[test]
    fn test_cli_player_reads_indices() {
        let engine = GameEngine::new(cat_grid());
        let words = WordList::from_words(["cat"]);
        let mut player = CliPlayer::new(Cursor::new(&b"0 1 2\n"[..]), Vec::new());
        let cells = player.select_move(&engine, &words, Side::Player1).unwrap();
        assert_eq!(cells, vec![0, 1, 2]);

        let out = output_of(player);
        assert!(out.contains("Enter the indices of your word: "));
        // the board is shown before the prompt
        assert!(out.contains("C    A    T"));
    }

    #[test]
    fn test_cli_player_reprompts_on_bad_input() {
        let engine = GameEngine::new(cat_grid());
        let words = WordList::from_words(["cat"]);
        let mut player = CliPlayer::new(Cursor::new(&b"x\n9\n0 1 2\n"[..]), Vec::new());
        let cells = player.select_move(&engine, &words, Side::Player1).unwrap();
        assert_eq!(cells, vec![0, 1, 2]);

        let out = output_of(player);
        assert!(out.contains("\"x\" is not a cell index"));
        assert!(out.contains("You used a nonexistent letter"));
        assert_eq!(out.matches("Enter the indices of your word: ").count(), 3);
    }

    #[test]
    fn test_cli_player_input_closed() {
        let engine = GameEngine::new(cat_grid());
        let words = WordList::from_words(["cat"]);
        let mut player = CliPlayer::new(Cursor::new(&b""[..]), Vec::new());
        assert_eq!(
            player.select_move(&engine, &words, Side::Player1),
            Err(GameError::InputClosed)
        );
    }

    #[test]
    fn test_rejected_word_is_retried() {
        let mut engine = GameEngine::new(cat_grid());
        let words = WordList::from_words(["cat"]);
        let mut player = CliPlayer::new(Cursor::new(&b"0 1\n0 1 2\n"[..]), Vec::new());

        let mv = play_turn(&mut engine, &mut player, &words).unwrap();
        assert_eq!(mv.word, "cat");
        assert_eq!(engine.score(), (3, 0));

        let out = output_of(player);
        assert!(out.contains("This is not a valid word"));
        assert!(out.contains("Player 1 has played cat"));
    }

    #[test]
    fn test_game_against_computer() {
        let words = WordList::from_words(["at", "op"]);
        let mut engine = GameEngine::new(Grid::<2>::from_str_letters("atop").unwrap());
        let mut human = CliPlayer::new(Cursor::new(&b"0 1\n"[..]), Vec::new());
        let mut computer = AiPlayer::new(Strategy::Greedy);

        let winner = run_game(&mut engine, &mut human, &mut computer, &words).unwrap();
        // two cells each, the tie goes to Player 2
        assert_eq!(winner, Side::Player2);

        let out = output_of(human);
        assert!(out.contains("Player 1 has played at"));
        assert!(out.contains("Computer has played op"));
    }
}
