#![allow(dead_code)]

pub mod items;
pub mod linestring;
pub mod mixed;
