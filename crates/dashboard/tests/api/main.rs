mod forecast;
mod helpers;
mod ui_fragments;
