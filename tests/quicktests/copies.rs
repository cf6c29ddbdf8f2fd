use canopy::{BinarySearchTree, BinaryTree, Node, Tree};

quickcheck::quickcheck! {
    fn copies_of_subtrees_match_their_views(xs: Vec<i16>) -> bool {
        let Ok(search) = BinarySearchTree::from_values(xs) else {
            return true;
        };
        search.nodes().all(|node| {
            let view = node.subtree();
            let copy = BinaryTree::from(node);
            copy.traverse() == view.traverse()
                && copy.traverse_breadth_first() == view.traverse_breadth_first()
                && copy.size() == view.size()
                && copy.height() == view.height()
                && copy.root().and_then(Node::parent).is_none()
        })
    }
}

quickcheck::quickcheck! {
    fn display_lists_the_pre_order(xs: Vec<i16>) -> bool {
        let Ok(tree) = BinarySearchTree::from_values(xs) else {
            return true;
        };
        let listed: Vec<String> = tree.iter().map(ToString::to_string).collect();
        tree.to_string() == format!("[{}]", listed.join(", "))
    }
}
