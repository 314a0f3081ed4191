pub mod suspicious;
