pub mod wellness;
