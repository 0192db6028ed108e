use letterpress::{check_viability, generate_grid, GameError, Grid, Rejection, WordList};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_viability_rules() {
    assert_eq!(check_viability(b"aeiou"), Ok(()));
    assert_eq!(
        check_viability(b"aeio"),
        Err(Rejection::TooFewVowels { found: 4 })
    );
    assert_eq!(
        check_viability(b"aeiouaaa"),
        Err(Rejection::TooManySameLetter {
            letter: 'a',
            count: 4
        })
    );
    // a tie reports the alphabetically first letter
    assert_eq!(
        check_viability(b"aaaaeeeeiou"),
        Err(Rejection::TooManySameLetter {
            letter: 'a',
            count: 4
        })
    );
    assert_eq!(check_viability(b"aeioaq"), Err(Rejection::QWithoutU));
    assert_eq!(check_viability(b"aeiouq"), Ok(()));
    assert_eq!(
        check_viability(b"aeiouzzz"),
        Err(Rejection::TooManyHardLetter {
            letter: 'z',
            count: 3
        })
    );
    assert_eq!(check_viability(b"aeiouzz"), Ok(()));
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        Rejection::TooFewVowels { found: 2 }.to_string(),
        "minimum vowels (2 found)"
    );
    assert_eq!(Rejection::QWithoutU.to_string(), "Q without a U");
}

#[test]
fn test_generated_board_is_viable() {
    let mut rng = SmallRng::seed_from_u64(12345);
    for _ in 0..20 {
        let grid: Grid<5> = generate_grid(&mut rng).unwrap();
        assert_eq!(grid.letters().len(), 25);
        assert!(grid.letters().iter().all(u8::is_ascii_lowercase));
        assert_eq!(check_viability(grid.letters()), Ok(()));
    }
}

#[test]
fn test_generation_is_reproducible_with_seed() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let a: Grid<5> = generate_grid(&mut rng1).unwrap();
    let b: Grid<5> = generate_grid(&mut rng2).unwrap();
    assert_eq!(a.letters(), b.letters());
}

#[test]
fn test_generation_gives_up_on_tiny_board() {
    // one cell can never hold five vowels
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate_grid::<1, _>(&mut rng).unwrap_err();
    assert!(matches!(err, GameError::NoViableBoard { .. }));
}

#[test]
fn test_word_list_normalises_entries() {
    let words = WordList::from_words(["  Cat ", "\"dog\"", "", "cat", "GOAT", "ox"]);
    assert_eq!(words.len(), 4);
    assert!(words.contains("cat"));
    assert!(words.contains("dog"));
    assert!(words.contains("goat"));
    assert!(!words.contains("Cat"));
    let all: Vec<_> = words.iter().collect();
    assert_eq!(all, vec!["cat", "dog", "goat", "ox"]);
    let longest: Vec<_> = words.iter_longest_first().collect();
    assert_eq!(longest, vec!["goat", "cat", "dog", "ox"]);
}

#[test]
fn test_word_list_orders_by_character_count() {
    let words = WordList::from_words(["ab", "éé", "abc", "été"]);
    let longest: Vec<_> = words.iter_longest_first().collect();
    assert_eq!(longest, vec!["abc", "été", "ab", "éé"]);
}

#[test]
fn test_word_list_load() {
    let path = std::env::temp_dir().join(format!("letterpress-load-{}.txt", std::process::id()));
    std::fs::write(&path, "rogue\ntoga\n\nrogue\n").unwrap();
    let words = WordList::load(&path).unwrap();
    assert_eq!(words.len(), 2);
    assert!(WordList::load(std::env::temp_dir().join("letterpress-missing.txt")).is_err());
    let _ = std::fs::remove_file(path);
}
