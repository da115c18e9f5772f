mod dispatch;
mod properties;
mod vectors;
