use std::marker::PhantomData;
use std::mem;

/// Vertex/instance buffer that grows to the next power of two on demand.
pub struct GrowableBuffer<T: bytemuck::Pod> {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> GrowableBuffer<T> {
    pub fn new(device: &wgpu::Device, label: &'static str, usage: wgpu::BufferUsages) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST;
        Self {
            label,
            usage,
            buffer: create::<T>(device, label, usage, 1),
            capacity: 1,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, items: &[T]) {
        if items.is_empty() {
            self.len = 0;
            return;
        }

        if items.len() > self.capacity {
            self.capacity = next_capacity(items.len());
            self.buffer = create::<T>(device, self.label, self.usage, self.capacity);
        }

        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(items));
        self.len = items.len() as u32;
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn create<T>(
    device: &wgpu::Device,
    label: &'static str,
    usage: wgpu::BufferUsages,
    capacity: usize,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity * mem::size_of::<T>()) as wgpu::BufferAddress,
        usage,
        mapped_at_creation: false,
    })
}

fn next_capacity(current: usize) -> usize {
    current.next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::next_capacity;

    #[test]
    fn capacity_rounds_up_to_power_of_two() {
        assert_eq!(next_capacity(1), 1);
        assert_eq!(next_capacity(3), 4);
        assert_eq!(next_capacity(1024), 1024);
        assert_eq!(next_capacity(1025), 2048);
    }
}
