pub mod a001_package;
