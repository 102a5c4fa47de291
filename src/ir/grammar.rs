//! Compact IR instruction grammar
//!
//! The closed catalog of instruction forms. Each opcode carries a fixed
//! operand signature; this table is the single source of truth for operand
//! shapes and no other module re-encodes them.

/// Lexical class of a single operand token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// Non-negative decimal literal: a non-empty run of ASCII digits and
    /// `.` (so `1.5`, `10`, and the degenerate `1..2` all lex)
    Decimal,
    /// Decimal literal with an optional leading `-`
    SignedDecimal,
    /// 0-based index of a previously created node: ASCII digits only
    NodeRef,
}

impl OperandKind {
    /// Test whether a token lexes as this operand kind.
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        match self {
            Self::Decimal => is_decimal(token),
            Self::SignedDecimal => is_decimal(token.strip_prefix('-').unwrap_or(token)),
            Self::NodeRef => !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Compact IR instruction opcode.
///
/// Every instruction — primitive, transform, or boolean — defines exactly
/// one new node, even when it also consumes prior nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `C w h d` — cube/box primitive
    Cube,
    /// `Y r h` — cylinder primitive
    Cylinder,
    /// `S r` — sphere primitive
    Sphere,
    /// `K r1 r2 h` — cone primitive
    Cone,
    /// `T n dx dy dz` — translate node `n`
    Translate,
    /// `R n ax ay az` — rotate node `n`
    Rotate,
    /// `SC n sx sy sz` — scale node `n`
    Scale,
    /// `U a b` — union of nodes `a` and `b`
    Union,
    /// `D a b` — difference of nodes `a` and `b`
    Difference,
    /// `I a b` — intersection of nodes `a` and `b`
    Intersection,
}

impl Opcode {
    /// All opcodes, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Cube,
        Self::Cylinder,
        Self::Sphere,
        Self::Cone,
        Self::Translate,
        Self::Rotate,
        Self::Scale,
        Self::Union,
        Self::Difference,
        Self::Intersection,
    ];

    /// Parse an instruction mnemonic. Case-sensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "C" => Some(Self::Cube),
            "Y" => Some(Self::Cylinder),
            "S" => Some(Self::Sphere),
            "K" => Some(Self::Cone),
            "T" => Some(Self::Translate),
            "R" => Some(Self::Rotate),
            "SC" => Some(Self::Scale),
            "U" => Some(Self::Union),
            "D" => Some(Self::Difference),
            "I" => Some(Self::Intersection),
            _ => None,
        }
    }

    /// Instruction mnemonic as written in IR text.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Cube => "C",
            Self::Cylinder => "Y",
            Self::Sphere => "S",
            Self::Cone => "K",
            Self::Translate => "T",
            Self::Rotate => "R",
            Self::Scale => "SC",
            Self::Union => "U",
            Self::Difference => "D",
            Self::Intersection => "I",
        }
    }

    /// Expected operand kinds, in order.
    #[must_use]
    pub const fn signature(self) -> &'static [OperandKind] {
        use OperandKind::{Decimal, NodeRef, SignedDecimal};
        match self {
            Self::Cube | Self::Cone => &[Decimal, Decimal, Decimal],
            Self::Cylinder => &[Decimal, Decimal],
            Self::Sphere => &[Decimal],
            Self::Translate | Self::Rotate => {
                &[NodeRef, SignedDecimal, SignedDecimal, SignedDecimal]
            }
            Self::Scale => &[NodeRef, Decimal, Decimal, Decimal],
            Self::Union | Self::Difference | Self::Intersection => &[NodeRef, NodeRef],
        }
    }

    /// Number of leading operands that reference prior nodes.
    #[must_use]
    pub const fn node_ref_count(self) -> usize {
        match self {
            Self::Translate | Self::Rotate | Self::Scale => 1,
            Self::Union | Self::Difference | Self::Intersection => 2,
            Self::Cube | Self::Cylinder | Self::Sphere | Self::Cone => 0,
        }
    }

    /// Test whether a sequence of operand tokens conforms to this opcode's
    /// signature: exact count, per-token kind match, no trailing garbage.
    #[must_use]
    pub fn matches_operands(self, operands: &[&str]) -> bool {
        let sig = self.signature();
        operands.len() == sig.len()
            && sig
                .iter()
                .zip(operands)
                .all(|(kind, token)| kind.matches(token))
    }
}

/// Recognize a tokenized line against the grammar.
///
/// Total predicate over the whole line: the first token must be a known
/// mnemonic and the remaining tokens must satisfy its signature exactly.
#[must_use]
pub fn recognize(tokens: &[&str]) -> Option<Opcode> {
    let (op, operands) = tokens.split_first()?;
    let opcode = Opcode::parse(op)?;
    opcode.matches_operands(operands).then_some(opcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_mnemonics() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::parse(op.mnemonic()), Some(op));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Opcode::parse("X"), None);
        assert_eq!(Opcode::parse("c"), None); // case-sensitive
        assert_eq!(Opcode::parse("sc"), None);
        assert_eq!(Opcode::parse(""), None);
    }

    #[test]
    fn test_signature_arity() {
        assert_eq!(Opcode::Cube.signature().len(), 3);
        assert_eq!(Opcode::Cylinder.signature().len(), 2);
        assert_eq!(Opcode::Sphere.signature().len(), 1);
        assert_eq!(Opcode::Cone.signature().len(), 3);
        assert_eq!(Opcode::Translate.signature().len(), 4);
        assert_eq!(Opcode::Rotate.signature().len(), 4);
        assert_eq!(Opcode::Scale.signature().len(), 4);
        assert_eq!(Opcode::Union.signature().len(), 2);
        assert_eq!(Opcode::Difference.signature().len(), 2);
        assert_eq!(Opcode::Intersection.signature().len(), 2);
    }

    #[test]
    fn test_decimal_lexing() {
        assert!(OperandKind::Decimal.matches("1"));
        assert!(OperandKind::Decimal.matches("1.5"));
        assert!(OperandKind::Decimal.matches("0.001"));
        assert!(OperandKind::Decimal.matches("10."));
        assert!(OperandKind::Decimal.matches(".5"));
        // Degenerate dot runs lex as decimals
        assert!(OperandKind::Decimal.matches("1..2"));
        assert!(OperandKind::Decimal.matches("."));

        assert!(!OperandKind::Decimal.matches(""));
        assert!(!OperandKind::Decimal.matches("-1.5"));
        assert!(!OperandKind::Decimal.matches("1.5e3"));
        assert!(!OperandKind::Decimal.matches("abc"));
    }

    #[test]
    fn test_signed_decimal_lexing() {
        assert!(OperandKind::SignedDecimal.matches("1.5"));
        assert!(OperandKind::SignedDecimal.matches("-1.5"));
        assert!(OperandKind::SignedDecimal.matches("-0"));

        assert!(!OperandKind::SignedDecimal.matches("-"));
        assert!(!OperandKind::SignedDecimal.matches("--1"));
        assert!(!OperandKind::SignedDecimal.matches("+1"));
        assert!(!OperandKind::SignedDecimal.matches(""));
    }

    #[test]
    fn test_node_ref_lexing() {
        assert!(OperandKind::NodeRef.matches("0"));
        assert!(OperandKind::NodeRef.matches("42"));
        assert!(OperandKind::NodeRef.matches("007"));

        assert!(!OperandKind::NodeRef.matches("1.0"));
        assert!(!OperandKind::NodeRef.matches("-1"));
        assert!(!OperandKind::NodeRef.matches(""));
    }

    #[test]
    fn test_recognize_primitives() {
        assert_eq!(recognize(&["C", "1.0", "2.0", "3.0"]), Some(Opcode::Cube));
        assert_eq!(recognize(&["Y", "0.5", "2"]), Some(Opcode::Cylinder));
        assert_eq!(recognize(&["S", "1"]), Some(Opcode::Sphere));
        assert_eq!(recognize(&["K", "1", "0", "2"]), Some(Opcode::Cone));
    }

    #[test]
    fn test_recognize_transforms() {
        assert_eq!(
            recognize(&["T", "0", "-1.5", "0", "2.5"]),
            Some(Opcode::Translate)
        );
        assert_eq!(recognize(&["R", "1", "90", "0", "0"]), Some(Opcode::Rotate));
        assert_eq!(recognize(&["SC", "0", "2", "2", "2"]), Some(Opcode::Scale));
    }

    #[test]
    fn test_recognize_booleans() {
        assert_eq!(recognize(&["U", "0", "1"]), Some(Opcode::Union));
        assert_eq!(recognize(&["D", "0", "1"]), Some(Opcode::Difference));
        assert_eq!(recognize(&["I", "0", "1"]), Some(Opcode::Intersection));
    }

    #[test]
    fn test_recognize_wrong_arity() {
        assert_eq!(recognize(&["C", "1", "2"]), None); // missing operand
        assert_eq!(recognize(&["C", "1", "2", "3", "4"]), None); // trailing garbage
        assert_eq!(recognize(&["S"]), None);
        assert_eq!(recognize(&["U", "0"]), None);
    }

    #[test]
    fn test_recognize_wrong_kind() {
        // Node refs must be plain integers
        assert_eq!(recognize(&["U", "0.5", "1"]), None);
        assert_eq!(recognize(&["T", "-1", "0", "0", "0"]), None);
        // Primitive dimensions cannot be negative
        assert_eq!(recognize(&["C", "-1", "2", "3"]), None);
        // Transform deltas may be negative
        assert!(recognize(&["T", "0", "-1", "-2", "-3"]).is_some());
    }

    #[test]
    fn test_recognize_empty_and_unknown() {
        assert_eq!(recognize(&[]), None);
        assert_eq!(recognize(&["X", "1", "2", "3"]), None);
    }

    #[test]
    fn test_node_ref_count() {
        assert_eq!(Opcode::Cube.node_ref_count(), 0);
        assert_eq!(Opcode::Translate.node_ref_count(), 1);
        assert_eq!(Opcode::Union.node_ref_count(), 2);
    }
}
