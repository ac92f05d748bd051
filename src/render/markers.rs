use super::instances::{grown_capacity, InstanceData};
use wgpu;

/// Append-only set of marker cubes mirrored into a GPU instance buffer.
///
/// Markers are never removed. New instances are uploaded on `flush`; when the
/// buffer runs out of room it is reallocated at double size and refilled.
pub(crate) struct MarkerLayer {
    instances: Vec<InstanceData>,
    buffer: wgpu::Buffer,
    capacity: usize,
    uploaded: usize,
}

impl MarkerLayer {
    pub(crate) fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            instances: Vec::with_capacity(capacity),
            buffer: create_instance_buffer(device, capacity),
            capacity,
            uploaded: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, instance: InstanceData) {
        self.instances.push(instance);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub(crate) fn flush(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.instances.len() > self.capacity {
            self.capacity = grown_capacity(self.capacity, self.instances.len());
            self.buffer = create_instance_buffer(device, self.capacity);
            self.uploaded = 0;
            log::info!("[gpu] marker buffer grown to {} instances", self.capacity);
        }
        if self.uploaded < self.instances.len() {
            let stride = std::mem::size_of::<InstanceData>() as u64;
            queue.write_buffer(
                &self.buffer,
                self.uploaded as u64 * stride,
                bytemuck::cast_slice(&self.instances[self.uploaded..]),
            );
            self.uploaded = self.instances.len();
        }
    }
}

pub(crate) fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (std::mem::size_of::<InstanceData>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
