use canopy::{BinarySearchTree, BinaryTree, Node, Tree};

quickcheck::quickcheck! {
    fn height_is_at_most_size(xs: Vec<u8>) -> bool {
        match BinarySearchTree::from_values(xs.iter().copied()) {
            Ok(tree) => tree.height().map_or(false, |height| height < tree.size()),
            Err(_) => xs.is_empty(),
        }
    }
}

quickcheck::quickcheck! {
    fn first_value_is_the_root(xs: Vec<u8>) -> bool {
        match BinarySearchTree::from_values(xs.iter().copied()) {
            Ok(tree) => tree.root().map(|root| root.value()) == xs.first(),
            Err(_) => xs.is_empty(),
        }
    }
}

quickcheck::quickcheck! {
    fn sorted_input_only_grows_right(n: u8) -> bool {
        let n = usize::from(n) + 1;
        let Ok(tree) = BinarySearchTree::from_values(0..n) else {
            return false;
        };
        tree.height() == Some(n - 1) && tree.nodes().all(|node| !node.has_left())
    }
}

quickcheck::quickcheck! {
    fn unwrapping_keeps_the_shape(xs: Vec<u8>) -> bool {
        let Ok(search) = BinarySearchTree::from_values(xs) else {
            return true;
        };
        let expected: Vec<u8> = search.iter().copied().collect();
        let tree = BinaryTree::from(search);
        tree.iter().copied().collect::<Vec<_>>() == expected
    }
}
