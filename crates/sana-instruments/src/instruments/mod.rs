pub mod aaq2;
pub mod ders18;
pub mod pcl5;
pub mod pdeq;
