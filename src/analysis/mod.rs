pub mod eigen_fixtures;
