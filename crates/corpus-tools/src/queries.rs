//! Fixed queries

/// Selects the topmost node in the vorfeld of an `smain` clause.
///
/// A node qualifies when it starts before the finite verb (the `hd` of the
/// nearest `smain` ancestor), either through its own head/complementizer or,
/// for a word, its own position. Nodes below a qualifying ancestor are
/// excluded so each vorfeld is reported once.
pub const VORFELD_QUERY: &str = r#"
//node[(  ancestor::node[@cat="smain"]/
             node[@rel="hd"]/number(@begin)
           > node[@rel="hd" or @rel="cmp"]/number(@begin)
       or ancestor::node[@cat="smain"]/
             node[@rel="hd"]/number(@begin)
           > number(@begin) and @pos
       )
       and not (  ancestor::node[   (
             ancestor::node[@cat="smain"]/
                node[@rel="hd"]/number(@begin)
               > node[@rel="hd" or @rel="cmp"]/number(@begin)
              or ancestor::node[@cat="smain"]/
                node[@rel="hd"]/number(@begin)
               > number(@begin) and @pos
                                    )
                                ]
               )
      ]
"#;
