mod chain;
mod transform;
