//! Fixed colony configurations.
//!
//! Expected results, with the greedy allocation serving colonists in
//! declaration order:
//!
//! | Fixture | Allocation | Jealous |
//! |---------|------------|---------|
//! | [`SCENARIO_A`] | A→2, B→1, C→3 | none |
//! | [`SCENARIO_C`] | A→1, B→2 | B |
//! | [`TRIANGLE`] | A→1, B→2, C→3 | B, C |

/// Three colonists, one rivalry between the two colonists that get their
/// first choice.
pub const SCENARIO_A: &str = "\
colon(A).
colon(B).
colon(C).
ressource(1).
ressource(2).
ressource(3).
deteste(A,B).
preferences(A,2,1,3).
preferences(B,1,2,3).
preferences(C,1,2,3).
";

/// Two rivals wanting the same resource.
pub const SCENARIO_C: &str = "\
colon(A).
colon(B).
ressource(1).
ressource(2).
deteste(A,B).
preferences(A,1,2).
preferences(B,1,2).
";

/// Three mutual rivals with identical rankings.
pub const TRIANGLE: &str = "\
colon(A).
colon(B).
colon(C).
ressource(1).
ressource(2).
ressource(3).
deteste(A,B).
deteste(B,C).
deteste(C,A).
preferences(A,1,2,3).
preferences(B,1,2,3).
preferences(C,1,2,3).
";

/// Scenario A with blank lines, indentation and spaces after commas.
pub const SCENARIO_A_LOOSE: &str = "
  colon(A).

colon(B).
colon(C).
ressource(1).
ressource(2).
ressource(3).

deteste(A, B).
preferences(A, 2, 1, 3).
preferences(B, 1, 2, 3).
preferences(C, 1, 2, 3).

";

/// Alphanumeric names longer than one character.
pub const NAMED: &str = "\
colon(alice).
colon(bob).
ressource(tent).
ressource(cabin).
deteste(bob,alice).
preferences(alice,cabin,tent).
preferences(bob,cabin,tent).
";
