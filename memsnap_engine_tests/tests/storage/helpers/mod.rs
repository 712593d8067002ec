pub mod etc;
