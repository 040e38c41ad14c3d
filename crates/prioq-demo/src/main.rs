use log::{info, trace};
use prioq_core::{PriorityQueue, QueueError};

fn print(queue: &PriorityQueue<String>) {
    for (idx, (sequence, value)) in queue.list().into_iter().enumerate() {
        println!("{}:{}/{}", idx, sequence, value);
    }
}

fn main() -> Result<(), QueueError> {
    env_logger::init();
    trace!("starting demo...");

    let mut queue: PriorityQueue<String> = PriorityQueue::new();
    queue.enqueue("dog".into(), 50)?;
    queue.enqueue("cat".into(), 30)?;
    queue.enqueue("bird".into(), 40)?;
    queue.enqueue("turtle".into(), 60)?;
    queue.enqueue("chicken".into(), 40)?;
    queue.enqueue("duck".into(), 40)?;
    print(&queue);

    while queue.size() > 0 {
        println!("{}", queue.dequeue()?);
    }

    info!("queue drained, next sequence is {}", queue.next_sequence());
    Ok(())
}
