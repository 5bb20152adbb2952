/*!
Security utilities.
*/

pub mod constant_time;
