mod assign;
mod comments;
mod images;
mod public;
mod status;
