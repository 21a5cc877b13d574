use crate::define_index_newtype;

define_index_newtype!(VertexIdx);
