pub mod mondo;
