/*!
 Contains logic and data structures used to determine how many bytes a value described by a type encoding occupies.

 ## Overview

 Type encodings are the compact strings produced by the Objective-C `@encode()` directive, i.e. `i` for an `int`
 or `[4^d]` for an array of four pointers to `double`. Archivers that lay out binary buffers generically, such as
 `NSArchiver`, need the size of each field at runtime to know how many bytes to copy, skip, or align.

 ## Features

 - Explicit `long` and pointer widths through [`Architecture`](crate::util::platform::Architecture); the sizes never depend on the host
 - A single [`ResolvedSize::Indeterminate`](models::ResolvedSize::Indeterminate) outcome for every encoding that cannot be sized
 - Nested arrays are walked without recursion, so deeply nested input cannot exhaust the stack
*/

pub mod cursor;
pub mod models;
pub mod resolver;
mod tests;
