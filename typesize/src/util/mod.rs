/*!
 This module defines the utilities used to classify and size type encodings.
*/

pub mod platform;
pub mod typesize;
