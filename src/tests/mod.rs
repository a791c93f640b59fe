mod pages;
mod quiz;
