use crate::types::{Node, ValueNode};

#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
}

impl<T> BstNode<T> {
    pub fn new(v: T) -> Self {
        Self { l: None, r: None, v }
    }
}

impl<T> Node for BstNode<T> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ValueNode for BstNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.v
    }

    fn set_value(&mut self, value: T) {
        self.v = value;
    }
}
