use logos::Logos;

use super::Ability;

/// Token of an ability modifier string such as `"+2 FOR, -2 DEX"`.
///
/// Anything that is neither a number nor one of the six keys comes out of
/// the lexer as an error and is skipped by the parser.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub(crate) enum ModToken {
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Number(i32),

    #[token("for", ignore(ascii_case))]
    For,

    #[token("dex", ignore(ascii_case))]
    Dex,

    #[token("con", ignore(ascii_case))]
    Con,

    #[token("int", ignore(ascii_case))]
    Int,

    #[token("sag", ignore(ascii_case))]
    Sag,

    #[token("cha", ignore(ascii_case))]
    Cha,
}

impl ModToken {
    /// The ability this token names, if it is a key.
    pub(crate) fn ability(self) -> Option<Ability> {
        match self {
            Self::Number(_) => None,
            Self::For => Some(Ability::For),
            Self::Dex => Some(Ability::Dex),
            Self::Con => Some(Ability::Con),
            Self::Int => Some(Ability::Int),
            Self::Sag => Some(Ability::Sag),
            Self::Cha => Some(Ability::Cha),
        }
    }
}

/// Lex a modifier string. Unrecognized input becomes `None`.
pub(crate) fn lex(source: &str) -> Vec<Option<ModToken>> {
    ModToken::lexer(source).map(Result::ok).collect()
}
