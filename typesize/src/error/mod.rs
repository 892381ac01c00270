/*!
 Contains the errors that can happen when walking type encodings.
*/

pub mod encoding;
