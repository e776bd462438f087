//! Grammar productions.
//!
//! Every production returns `Option`: `None` means an error was recorded and
//! no node is produced, so a malformed subtree is never attached to its
//! parent.
//!
//! Productions are entered with the first token of the construct as
//! `current` and leave `current` on the construct's last token.

mod expr;
mod stmt;
