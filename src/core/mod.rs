pub mod qm;
