// Domain layer: plain data types shared by both conversion directions.

pub mod model;
