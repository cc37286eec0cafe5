use std::collections::LinkedList;

fn main() {
    env_logger::init();

    let data: LinkedList<i32> = [5, 2, 9, 1, 5, 6].into_iter().collect();

    let mut sorted_data = Vec::with_capacity(data.len());
    stable_timsort::sort_into(data, &mut sorted_data);

    let line = sorted_data
        .iter()
        .map(|num| num.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}
