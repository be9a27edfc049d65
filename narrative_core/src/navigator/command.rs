//! Player commands parsed from input tokens.

/// Token that drinks a potion.
pub const POTION_TOKEN: char = 'H';

/// Token that lists the inventory.
pub const INVENTORY_TOKEN: char = 'I';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Follow the choice at this index.
    Choose(usize),
    UsePotion,
    ShowInventory,
    Invalid,
}

impl Command {
    /// Parse one token at a node offering `choice_count` choices.
    ///
    /// Only single characters are commands, and case matters. A letter that
    /// names an existing choice wins over `H` and `I`, so at a node with
    /// eight or more choices `H` picks the eighth.
    pub fn parse(token: &str, choice_count: usize) -> Self {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Command::Invalid;
        };

        if let Some(index) = choice_index(c) {
            if index < choice_count {
                return Command::Choose(index);
            }
        }

        match c {
            POTION_TOKEN => Command::UsePotion,
            INVENTORY_TOKEN => Command::ShowInventory,
            _ => Command::Invalid,
        }
    }
}

/// Index named by a choice letter: 'A' is 0.
pub fn choice_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter as u8 - b'A'))
}

/// Letter naming the choice at `index`, if there is one.
pub fn choice_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_in_range() {
        assert_eq!(Command::parse("A", 2), Command::Choose(0));
        assert_eq!(Command::parse("B", 2), Command::Choose(1));
        assert_eq!(Command::parse("C", 2), Command::Invalid);
    }

    #[test]
    fn test_potion_and_inventory() {
        assert_eq!(Command::parse("H", 2), Command::UsePotion);
        assert_eq!(Command::parse("I", 2), Command::ShowInventory);
    }

    #[test]
    fn test_choice_letter_beats_potion() {
        assert_eq!(Command::parse("H", 8), Command::Choose(7));
        assert_eq!(Command::parse("I", 8), Command::ShowInventory);
        assert_eq!(Command::parse("I", 9), Command::Choose(8));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert_eq!(Command::parse("a", 3), Command::Invalid);
        assert_eq!(Command::parse("AB", 3), Command::Invalid);
        assert_eq!(Command::parse("", 3), Command::Invalid);
        assert_eq!(Command::parse("1", 3), Command::Invalid);
        assert_eq!(Command::parse("h", 3), Command::Invalid);
    }

    #[test]
    fn test_letter_index_conversion() {
        assert_eq!(choice_index('A'), Some(0));
        assert_eq!(choice_index('Z'), Some(25));
        assert_eq!(choice_index('z'), None);
        assert_eq!(choice_letter(2), Some('C'));
        assert_eq!(choice_letter(26), None);
    }
}
