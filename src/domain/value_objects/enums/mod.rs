pub mod sort_directions;
