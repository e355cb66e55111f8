use crate::layout;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Links `relative` under the root, creating intermediate directory nodes on
/// the way down. Components already present in `lookup` are reused so that
/// `src/api` and `src/main.jsx` share one `src` node.
fn insert_path(
    root: &Rc<RefCell<TreeNode>>,
    lookup: &mut HashMap<String, Rc<RefCell<TreeNode>>>,
    relative: &Path,
    is_file: bool,
) {
    let mut current = Rc::clone(root);
    let mut key = String::new();

    let components: Vec<_> = relative.components().collect();
    let len = components.len();

    for (i, component) in components.iter().enumerate() {
        let name = component.as_os_str().to_string_lossy().to_string();

        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&name);

        let next = match lookup.get(&key) {
            Some(node) => Rc::clone(node),
            None => {
                // only the final component of a file path is a file node
                let node = Rc::new(RefCell::new(TreeNode::new(name, is_file && i == len - 1)));

                current.borrow_mut().children.push(Rc::clone(&node));
                lookup.insert(key.clone(), Rc::clone(&node));

                node
            }
        };

        current = next;
    }
}

/// Build the directory tree from the declared layout, returning the root node.
fn build_tree(destination: &Path) -> Rc<RefCell<TreeNode>> {
    // create a root node to represent the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // map relative path to node
    let mut lookup: HashMap<String, Rc<RefCell<TreeNode>>> = HashMap::new();

    for relative in layout::DIRECTORIES {
        insert_path(&root, &mut lookup, Path::new(relative), false);
    }

    for entry in layout::FILES {
        insert_path(&root, &mut lookup, Path::new(entry.path), true);
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix.yellow())
    } else {
        format!("{}│   ", prefix.yellow())
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

/// Renders the generated layout rooted at `destination` to stdout.
pub fn render(destination: &Path) {
    let tree_root = build_tree(destination);

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );
    println!();

    print_tree(&tree_root, "", true);
}
