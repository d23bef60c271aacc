//! Domain layer - Pure algorithm units
//!
//! One module per problem family. Every technique is its own public
//! function so variants can be called and compared independently.

pub mod array;
pub mod binary;
pub mod calendar;
pub mod combinatorics;
pub mod digits;
pub mod divisibility;
pub mod divisors;
pub mod gcd;
pub mod geometry;
pub mod palindrome;
pub mod parity;
pub mod power;
pub mod prime;
pub mod series;
pub mod sqrt;
pub mod swap;
pub mod table;
